use serde::{Deserialize, Serialize};

/// Prodotto del catalogo esposto sul wire (non è un modello di DB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Intero positivo univoco, assegnato dal servizio alla creazione, poi immutabile.
    pub id: u32,
    pub name: String,
    /// Può essere vuota.
    pub description: String,
    /// Importo decimale non negativo; la valuta (Real brasiliano) è solo convenzione di presentazione.
    pub price: f64,
    /// Etichetta libera; in lettura viene confrontata come sottostringa case-insensitive.
    pub category: String,
    /// Non negativo; zero significa non acquistabile.
    pub stock_quantity: u32,
    /// URL o percorso dell'immagine; se assente il client mostra un segnaposto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: String, // RFC3339 UTC
}
