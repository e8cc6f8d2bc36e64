use crate::cli::parser::Commands;
use crate::core::board_feet::derive_unit;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calc {
        length,
        width,
        thickness,
        pieces,
    } = cmd
    {
        match derive_unit(length, width, thickness, pieces) {
            Some(unit) => println!("{unit}"),
            None => warning(
                "Board feet need a length, width, thickness and piece count greater than zero.",
            ),
        }
    }
    Ok(())
}
