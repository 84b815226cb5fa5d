//! The "produces its own code" capability.

use std::{fmt::Debug, rc::Rc};

/// Something that can produce its own script code.
///
/// Builders that attach an extension render the extension's code in place of
/// their own-code fragment. `None` means there is nothing to emit.
pub trait ScriptSource: Debug {
    fn script(&self) -> Option<String>;
}

impl<T: ScriptSource + ?Sized> ScriptSource for &T {
    fn script(&self) -> Option<String> {
        (*self).script()
    }
}

impl<T: ScriptSource + ?Sized> ScriptSource for Box<T> {
    fn script(&self) -> Option<String> {
        self.as_ref().script()
    }
}

impl<T: ScriptSource + ?Sized> ScriptSource for Rc<T> {
    fn script(&self) -> Option<String> {
        self.as_ref().script()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(&'static str);

    impl ScriptSource for Fixed {
        fn script(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let fixed = Fixed("go();");
        assert_eq!((&fixed).script().as_deref(), Some("go();"));

        let boxed: Box<dyn ScriptSource> = Box::new(Fixed("boxed();"));
        assert_eq!(boxed.script().as_deref(), Some("boxed();"));

        let shared: Rc<dyn ScriptSource> = Rc::new(Fixed("shared();"));
        assert_eq!(shared.script().as_deref(), Some("shared();"));
    }
}
