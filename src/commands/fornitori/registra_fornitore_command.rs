use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Fornitore, Magazzino, StoricoMovimento, TipoMovimento},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistraFornitoreCommand {
    pub fornitore: Fornitore,
}

impl Command for RegistraFornitoreCommand {
    /// The id assigned to the new supplier
    type Result = String;

    #[instrument(skip(self, magazzino), fields(codice = %self.fornitore.codice))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        self.fornitore.validate()?;

        let codice = self.fornitore.codice.trim();
        if magazzino.fornitore(codice).is_some() {
            return Err(ServiceError::Conflict(format!(
                "Fornitore con codice '{}' già registrato",
                codice
            )));
        }

        let id = Uuid::new_v4().to_string();
        let mut fornitore = self.fornitore.clone();
        fornitore.id = Some(id.clone());
        fornitore.codice = codice.to_string();

        magazzino.registra(StoricoMovimento::nuovo(
            TipoMovimento::FornitoreRegistrato,
            &fornitore.codice,
            format!("Registrato fornitore {}", fornitore.ragione_sociale),
        ));
        magazzino.fornitori.push(fornitore);

        info!("Fornitore registrato: {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fornitore::tests::fornitore_valido;
    use assert_matches::assert_matches;

    #[test]
    fn registers_with_trimmed_unique_code() {
        let mut magazzino = Magazzino::default();
        let mut fornitore = fornitore_valido();
        fornitore.codice = " CART01 ".into();

        let id = RegistraFornitoreCommand { fornitore }
            .execute(&mut magazzino)
            .unwrap();

        let salvato = magazzino.fornitore("CART01").unwrap();
        assert_eq!(salvato.id.as_deref(), Some(id.as_str()));
        assert_eq!(magazzino.storico()[0].tipo, TipoMovimento::FornitoreRegistrato);

        assert_matches!(
            RegistraFornitoreCommand {
                fornitore: fornitore_valido()
            }
            .execute(&mut magazzino),
            Err(ServiceError::Conflict(_))
        );
        assert_eq!(magazzino.fornitori().len(), 1);
    }

    #[test]
    fn invalid_vat_number_is_rejected() {
        let mut magazzino = Magazzino::default();
        let mut fornitore = fornitore_valido();
        fornitore.piva = "12345678900".into();

        assert_matches!(
            RegistraFornitoreCommand { fornitore }.execute(&mut magazzino),
            Err(ServiceError::ValidationError(_))
        );
        assert!(magazzino.fornitori().is_empty());
    }
}
