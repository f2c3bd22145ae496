pub mod aggiorna_fornitore_command;
pub mod elimina_fornitore_command;
pub mod registra_fornitore_command;

pub use aggiorna_fornitore_command::AggiornaFornitoreCommand;
pub use elimina_fornitore_command::EliminaFornitoreCommand;
pub use registra_fornitore_command::RegistraFornitoreCommand;
