use thiserror::Error;

/// Fallimenti lato client. La pipeline li collassa tutti nello stesso stato
/// `Error` di visualizzazione: 400, 404, 500 e guasti di trasporto non si
/// distinguono oltre il messaggio trasportato (semplificazione voluta).
#[derive(Error, Debug)]
pub enum ClientError {
    /// Guasto di rete o di decodifica del corpo.
    #[error("erro ao conectar com o servidor: {0}")]
    Transport(#[from] reqwest::Error),

    /// Il server ha risposto con una busta `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Busta di successo senza campo `data`: risposta malformata.
    #[error("resposta sem dados")]
    MissingData,
}
