use serde::Serialize;
use tracing::debug;

use super::{TabellaStorico, Vista};
use crate::models::StoricoMovimento;

/// Shown when there is no history to list.
pub const STORICO_VUOTO: &str = "Nessun movimento registrato";

/// Read-only view over the movement history.
#[derive(Debug, Clone, Copy)]
pub struct StoricoTab<'a> {
    storico: Option<&'a [StoricoMovimento]>,
}

/// What the history tab shows: the empty state, or the table it delegates to.
#[derive(Debug, Clone, Copy)]
pub enum VistaStorico<'a> {
    Vuoto,
    Tabella(TabellaStorico<'a>),
}

impl<'a> StoricoTab<'a> {
    pub const TITOLO: &'static str = "Storico movimenti";

    pub fn new(storico: Option<&'a [StoricoMovimento]>) -> Self {
        Self { storico }
    }

    pub fn conteggio(&self) -> usize {
        self.storico.map_or(0, <[_]>::len)
    }

    pub fn render(&self) -> VistaStorico<'a> {
        debug!(
            movimenti = self.conteggio(),
            presente = self.storico.is_some(),
            "Rendering storico"
        );

        match self.storico {
            Some(movimenti) if !movimenti.is_empty() => {
                VistaStorico::Tabella(TabellaStorico::new(movimenti))
            }
            _ => VistaStorico::Vuoto,
        }
    }
}

impl VistaStorico<'_> {
    /// Flattens to the common view shape for printing or serialization.
    pub fn vista(&self) -> Vista {
        match self {
            Self::Vuoto => {
                let mut vista = Vista::new(StoricoTab::TITOLO, 0);
                vista.messaggio = Some(STORICO_VUOTO.to_string());
                vista
            }
            Self::Tabella(tabella) => tabella.render(StoricoTab::TITOLO),
        }
    }
}

impl Serialize for VistaStorico<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vista().serialize(serializer)
    }
}
