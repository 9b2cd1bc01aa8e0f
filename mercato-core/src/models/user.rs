use serde::{Deserialize, Serialize};

/// Utente esposto sul wire. La password accettata in creazione non compare mai qui.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    /// Attesa univoca ma non imposta dal servizio.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: String, // RFC3339 UTC
}
