use super::Params;
use crate::*;

/// `getSequence`: `[table][sequence name]`.
pub(super) fn check(p: &Params) -> Outcome {
    p.no_extra(3)?;
    p.table(1, "[table]")?;
    let name = p.require(2, "[sequence name]")?;
    if is_strict_identifier(name) {
        Ok(())
    } else {
        Err(p.invalid(
            format!("invalid [sequence name] '{name}', must start with a letter"),
            name,
        ))
    }
}
