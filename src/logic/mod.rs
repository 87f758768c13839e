crate::reexport!(validator);
