//! Descriptors rows carry, dispatched through the host traits in
//! [`crate::services::azioni`].

use serde::Serialize;
use strum::IntoStaticStr;
use uuid::Uuid;

use super::Azione;
use crate::{
    errors::ServiceError,
    models::ModificaOrdine,
    services::azioni::{AzioniEsauriti, AzioniGiacenza, AzioniOrdini},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "azione", content = "id", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AzioneOrdine {
    SpostaInGiacenza(Uuid),
    ConfermaOrdine(Uuid),
    EliminaOrdine(Uuid),
    ModificaOrdine(Uuid),
}

impl Azione for AzioneOrdine {
    fn nome(&self) -> &'static str {
        self.into()
    }

    fn id(&self) -> Uuid {
        match *self {
            Self::SpostaInGiacenza(id)
            | Self::ConfermaOrdine(id)
            | Self::EliminaOrdine(id)
            | Self::ModificaOrdine(id) => id,
        }
    }
}

impl AzioneOrdine {
    /// Runs the action against the host. `ModificaOrdine` needs the edited
    /// fields in `modifica`; the other actions ignore it.
    pub fn invoca<H: AzioniOrdini + ?Sized>(
        self,
        host: &mut H,
        modifica: Option<ModificaOrdine>,
    ) -> Result<(), ServiceError> {
        match self {
            Self::SpostaInGiacenza(id) => host.sposta_in_giacenza(id).map(|_| ()),
            Self::ConfermaOrdine(id) => host.conferma_ordine(id),
            Self::EliminaOrdine(id) => host.elimina_ordine(id).map(|_| ()),
            Self::ModificaOrdine(id) => {
                let modifica = modifica.ok_or_else(|| {
                    ServiceError::InvalidInput("Modifica dell'ordine senza dati".to_string())
                })?;
                host.modifica_ordine(id, modifica).map(|_| ())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "azione", content = "id", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AzioneGiacenza {
    Scarica(Uuid),
    SegnaEsaurito(Uuid),
}

impl Azione for AzioneGiacenza {
    fn nome(&self) -> &'static str {
        self.into()
    }

    fn id(&self) -> Uuid {
        match *self {
            Self::Scarica(id) | Self::SegnaEsaurito(id) => id,
        }
    }
}

impl AzioneGiacenza {
    /// Runs the action against the host. `Scarica` needs the sheet count.
    pub fn invoca<H: AzioniGiacenza + ?Sized>(
        self,
        host: &mut H,
        fogli: Option<u32>,
    ) -> Result<(), ServiceError> {
        match self {
            Self::Scarica(id) => {
                let fogli = fogli.ok_or_else(|| {
                    ServiceError::InvalidInput("Scarico senza numero di fogli".to_string())
                })?;
                host.scarica(id, fogli).map(|_| ())
            }
            Self::SegnaEsaurito(id) => host.segna_esaurito(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "azione", content = "id", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AzioneEsaurito {
    RiportaInGiacenza(Uuid),
}

impl Azione for AzioneEsaurito {
    fn nome(&self) -> &'static str {
        self.into()
    }

    fn id(&self) -> Uuid {
        match *self {
            Self::RiportaInGiacenza(id) => id,
        }
    }
}

impl AzioneEsaurito {
    /// Runs the action against the host. `fogli` is the sheet count put back
    /// on the shelf; `None` keeps the count recorded at archiving.
    pub fn invoca<H: AzioniEsauriti + ?Sized>(
        self,
        host: &mut H,
        fogli: Option<u32>,
    ) -> Result<(), ServiceError> {
        match self {
            Self::RiportaInGiacenza(id) => host.riporta_in_giacenza(id, fogli),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrdineAttesa;
    use assert_matches::assert_matches;
    use mockall::{mock, predicate::eq};

    mock! {
        pub Ordini {}
        impl AzioniOrdini for Ordini {
            fn sposta_in_giacenza(&mut self, id: Uuid) -> Result<Uuid, ServiceError>;
            fn conferma_ordine(&mut self, id: Uuid) -> Result<(), ServiceError>;
            fn elimina_ordine(&mut self, id: Uuid) -> Result<OrdineAttesa, ServiceError>;
            fn modifica_ordine(&mut self, id: Uuid, modifica: ModificaOrdine) -> Result<OrdineAttesa, ServiceError>;
        }
    }

    mock! {
        pub Giacenza {}
        impl AzioniGiacenza for Giacenza {
            fn scarica(&mut self, id: Uuid, fogli: u32) -> Result<u32, ServiceError>;
            fn segna_esaurito(&mut self, id: Uuid) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub Esauriti {}
        impl AzioniEsauriti for Esauriti {
            fn riporta_in_giacenza(&mut self, id: Uuid, fogli: Option<u32>) -> Result<(), ServiceError>;
        }
    }

    #[test]
    fn names_are_snake_case() {
        let id = Uuid::new_v4();
        assert_eq!(AzioneOrdine::SpostaInGiacenza(id).nome(), "sposta_in_giacenza");
        assert_eq!(AzioneGiacenza::SegnaEsaurito(id).nome(), "segna_esaurito");
        assert_eq!(AzioneEsaurito::RiportaInGiacenza(id).nome(), "riporta_in_giacenza");
        assert_eq!(AzioneOrdine::ModificaOrdine(id).id(), id);
    }

    #[test]
    fn descriptors_serialize_with_their_target() {
        let id = Uuid::nil();
        let json = serde_json::to_value(AzioneOrdine::ConfermaOrdine(id)).unwrap();
        assert_eq!(json["azione"], "conferma_ordine");
        assert_eq!(json["id"], id.to_string());
    }

    #[test]
    fn order_actions_call_the_matching_callback_with_the_order_id() {
        let id = Uuid::new_v4();
        let mut host = MockOrdini::new();
        host.expect_conferma_ordine()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));
        host.expect_sposta_in_giacenza()
            .with(eq(id))
            .times(1)
            .returning(|id| Ok(id));

        AzioneOrdine::ConfermaOrdine(id).invoca(&mut host, None).unwrap();
        AzioneOrdine::SpostaInGiacenza(id).invoca(&mut host, None).unwrap();
    }

    #[test]
    fn edit_without_fields_never_reaches_the_host() {
        let mut host = MockOrdini::new();
        host.expect_modifica_ordine().never();

        assert_matches!(
            AzioneOrdine::ModificaOrdine(Uuid::new_v4()).invoca(&mut host, None),
            Err(ServiceError::InvalidInput(_))
        );
    }

    #[test]
    fn stock_withdrawal_forwards_the_sheet_count() {
        let id = Uuid::new_v4();
        let mut host = MockGiacenza::new();
        host.expect_scarica()
            .with(eq(id), eq(300))
            .times(1)
            .returning(|_, _| Ok(700));

        AzioneGiacenza::Scarica(id).invoca(&mut host, Some(300)).unwrap();
        assert_matches!(
            AzioneGiacenza::Scarica(id).invoca(&mut host, None),
            Err(ServiceError::InvalidInput(_))
        );
    }

    #[test]
    fn restore_forwards_the_returned_sheets() {
        let id = Uuid::new_v4();
        let mut host = MockEsauriti::new();
        host.expect_riporta_in_giacenza()
            .with(eq(id), eq(Some(120)))
            .times(1)
            .returning(|_, _| Ok(()));
        host.expect_riporta_in_giacenza()
            .with(eq(id), eq(None))
            .times(1)
            .returning(|_, _| Err(ServiceError::InvalidInput("nessun foglio".to_string())));

        AzioneEsaurito::RiportaInGiacenza(id)
            .invoca(&mut host, Some(120))
            .unwrap();
        assert_matches!(
            AzioneEsaurito::RiportaInGiacenza(id).invoca(&mut host, None),
            Err(ServiceError::InvalidInput(_))
        );
    }
}
