// glapi/src/macros.rs
//
//! The macro that expands the command catalog into the function table.

/// Expands a catalog of OpenGL commands, grouped by the feature that
/// introduces them, into:
///
/// * a `storage` module holding one mutable slot per command;
/// * one `pub unsafe fn` wrapper per command that forwards through its slot;
/// * the `COMMANDS` descriptor list, in catalog (ascending feature) order;
/// * the `reset`/`load_all`/`slot_is_loaded` table operations.
///
/// Dispatch at call time is a direct slot read, never a name lookup. The
/// symbol passed to the resolver is the command name prefixed with `gl`.
macro_rules! gl_functions {
    ($(
        $feature:ident {
            $( fn $name:ident ( $( $arg:ident : $argty:ty ),* ) -> $ret:ty ; )*
        }
    )*) => {
        pub(crate) mod storage {
            #![allow(non_upper_case_globals)]
            use super::FnPtr;
            $($(
                pub(crate) static mut $name: FnPtr = FnPtr::UNLOADED;
            )*)*
        }

        $($(
            #[allow(non_snake_case, clippy::missing_safety_doc)]
            #[inline]
            pub unsafe fn $name($($arg: $argty),*) -> $ret {
                ::std::mem::transmute::<
                    _,
                    extern "system" fn($($argty),*) -> $ret,
                >(storage::$name.f)($($arg),*)
            }
        )*)*

        /// Every command this crate knows how to resolve, in the order the
        /// loader resolves them.
        pub static COMMANDS: &[CommandDescriptor] = &[
            $($(
                CommandDescriptor {
                    name: concat!("gl", stringify!($name)),
                    feature: stringify!($feature),
                },
            )*)*
        ];

        /// Returns every slot to the unloaded state.
        pub(crate) fn reset() {
            unsafe {
                $($(
                    storage::$name = FnPtr::UNLOADED;
                )*)*
            }
        }

        /// Resolves every slot through `loadfn`, in catalog order.
        pub(crate) fn load_all<F>(loadfn: &mut F)
        where
            F: FnMut(&'static str) -> *const ::std::os::raw::c_void,
        {
            unsafe {
                $($(
                    storage::$name = FnPtr::new(loadfn(concat!("gl", stringify!($name))));
                )*)*
            }
        }

        /// Whether the named slot resolved during the most recent load.
        pub(crate) fn slot_is_loaded(name: &str) -> bool {
            match name {
                $($(
                    concat!("gl", stringify!($name)) => unsafe {
                        storage::$name.is_loaded
                    },
                )*)*
                _ => false,
            }
        }
    };
}
