use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Fornitore, Magazzino, ModificaFornitore, StoricoMovimento, TipoMovimento},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct AggiornaFornitoreCommand {
    pub codice: String,
    pub modifica: ModificaFornitore,
}

impl Command for AggiornaFornitoreCommand {
    type Result = Fornitore;

    #[instrument(skip(self, magazzino), fields(codice = %self.codice))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino
            .fornitori
            .iter()
            .position(|f| f.codice == self.codice)
            .ok_or_else(|| ServiceError::fornitore_non_trovato(&self.codice))?;

        let aggiornato = self.modifica.applica(&magazzino.fornitori[pos]);
        aggiornato.validate()?;

        magazzino.registra(StoricoMovimento::nuovo(
            TipoMovimento::FornitoreModificato,
            &self.codice,
            format!("Aggiornato fornitore {}", aggiornato.ragione_sociale),
        ));
        magazzino.fornitori[pos] = aggiornato.clone();

        info!("Fornitore aggiornato: {}", self.codice);
        Ok(aggiornato)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fornitori::RegistraFornitoreCommand;
    use crate::models::fornitore::tests::fornitore_valido;
    use assert_matches::assert_matches;

    fn magazzino_con_fornitore() -> Magazzino {
        let mut magazzino = Magazzino::default();
        RegistraFornitoreCommand {
            fornitore: fornitore_valido(),
        }
        .execute(&mut magazzino)
        .unwrap();
        magazzino
    }

    #[test]
    fn updates_contact_details() {
        let mut magazzino = magazzino_con_fornitore();

        let aggiornato = AggiornaFornitoreCommand {
            codice: "CART01".into(),
            modifica: ModificaFornitore {
                telefono: Some("035 765432".into()),
                ..Default::default()
            },
        }
        .execute(&mut magazzino)
        .unwrap();

        assert_eq!(aggiornato.telefono.as_deref(), Some("035 765432"));
        assert_eq!(magazzino.fornitore("CART01"), Some(&aggiornato));
        assert!(aggiornato.id.is_some());
    }

    #[test]
    fn invalid_update_is_rejected() {
        let mut magazzino = magazzino_con_fornitore();
        let prima = magazzino.clone();

        assert_matches!(
            AggiornaFornitoreCommand {
                codice: "CART01".into(),
                modifica: ModificaFornitore {
                    cap: Some("ABC".into()),
                    ..Default::default()
                },
            }
            .execute(&mut magazzino),
            Err(ServiceError::ValidationError(_))
        );
        assert_eq!(magazzino, prima);
    }

    #[test]
    fn unknown_supplier_is_not_found() {
        let mut magazzino = magazzino_con_fornitore();
        assert_matches!(
            AggiornaFornitoreCommand {
                codice: "ALTRO".into(),
                modifica: ModificaFornitore::default(),
            }
            .execute(&mut magazzino),
            Err(ServiceError::NotFound(_))
        );
    }
}
