// src/journal.rs
//
// Journalisation console (natif seulement). Niveau via RUST_LOG, "info" sinon.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const NIVEAU_DEFAUT: &str = "info";

pub fn init() {
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(NIVEAU_DEFAUT));

    // un abonné déjà installé n’est pas une erreur fatale : il reçoit l’avertissement
    if let Err(e) = tracing_subscriber::registry()
        .with(filtre)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::warn!(erreur = %e, "abonné de journalisation déjà installé");
    }
}
