use serde::{Deserialize, Serialize};

/// A catalog tier (tamaño). Wire keys are the Spanish ones the storefront
/// stores; `nombre` doubles as the key orders reference, with nothing
/// enforcing that the reference stays valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub nombre: String,
    pub precio: f64,
    #[serde(rename = "maxSabores")]
    pub max_sabores: u32,
}

/// Combined payload for the admin screen's initial load.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub sizes: Vec<Size>,
    pub flavors: Vec<String>,
}
