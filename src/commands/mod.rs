use crate::{errors::ServiceError, models::Magazzino};

/// Command trait for implementing the Command Pattern
///
/// A command carries everything one business operation needs, checks it
/// against the current state and only then mutates the warehouse. A command
/// that returns an error has left the warehouse untouched.
pub trait Command {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command against the warehouse state
    ///
    /// # Arguments
    /// * `magazzino` - State to validate against and mutate; every successful
    ///   execution appends its movement(s) to the history
    ///
    /// # Returns
    /// * `Result<Self::Result, ServiceError>` - The result of command execution or an error
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError>;
}

pub mod fornitori;
pub mod giacenza;
pub mod ordini;
