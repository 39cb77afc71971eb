//! Which input formats may be converted into which output formats

use crate::domain::Format;
use crate::error::{ParamsError, Result};

/// Checks that `input` can be converted to `output`
///
/// Arms are tried in order:
/// 1. anything converts to hex or BC32,
/// 2. random, hex and BC32 input convert to anything,
/// 3. BIP39 and SLIP39 pass through to themselves only when they arrived as a UR.
///
/// # Errors
/// Returns [`ParamsError::Incompatible`] naming both formats
///
/// # Examples
///
/// ```rust
/// use seedtool::compat;
/// use seedtool::domain::Format;
///
/// assert!(compat::check(&Format::Cards, &Format::Hex, false).is_ok());
/// assert!(compat::check(&Format::Bip39, &Format::Bip39, true).is_ok());
/// assert!(compat::check(&Format::Cards, &Format::Dice, false).is_err());
/// ```
pub fn check(input: &Format, output: &Format, is_ur_input: bool) -> Result<()> {
    let compatible = match (input, output) {
        (_, Format::Hex | Format::Bc32) => true,
        (Format::Random | Format::Hex | Format::Bc32, _) => true,
        (Format::Bip39, Format::Bip39) | (Format::Slip39(_), Format::Slip39(_)) => is_ur_input,
        _ => false,
    };

    if compatible {
        Ok(())
    } else {
        Err(ParamsError::Incompatible {
            input: input.name(),
            output: output.name(),
        })
    }
}
