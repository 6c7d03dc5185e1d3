use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use super::{CommandOutcome, DialogHost, DialogStrategy};
use crate::data::{FieldDialogData, GenerationData};
use crate::identifier::{CommandIdentifier, StrategyIdentifier};

/// A strategy without options of its own; the data is the base data.
pub struct DefaultDialogStrategy<D> {
    command_identifier: CommandIdentifier,
    strategy_identifier: StrategyIdentifier,
    _data: PhantomData<fn() -> D>,
}

impl<D> DefaultDialogStrategy<D> {
    pub fn new(
        command_identifier: CommandIdentifier,
        strategy_identifier: StrategyIdentifier,
    ) -> Self {
        Self {
            command_identifier,
            strategy_identifier,
            _data: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DefaultDialogStrategy<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDialogStrategy")
            .field("command_identifier", &self.command_identifier)
            .field("strategy_identifier", &self.strategy_identifier)
            .finish()
    }
}

impl<D> DialogStrategy for DefaultDialogStrategy<D>
where
    D: GenerationData + From<FieldDialogData>,
{
    type Data = D;
    type Command = Infallible;

    fn command_identifier(&self) -> CommandIdentifier {
        self.command_identifier
    }

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.strategy_identifier
    }

    fn handle(&mut self, command: Infallible, _dialog: &mut dyn DialogHost) -> CommandOutcome {
        match command {}
    }

    fn get_data(&self, base: FieldDialogData) -> D {
        D::from(base)
    }
}
