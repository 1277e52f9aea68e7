//! Declaration macro for catalog operations.

macro_rules! operation {
    (@impl $kind:ident $marker:ident $(#[$meta:meta])* $ty:ident = $name:literal {
        document: $document:expr,
        variables: $variables:ty,
        data: $data:ty $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl $crate::catalog::Operation for $ty {
            const NAME: &'static str = $name;
            const DOCUMENT: &'static str = $document;
            const KIND: $crate::catalog::OperationKind = $crate::catalog::OperationKind::$kind;
            type Variables = $variables;
            type Data = $data;
        }

        impl $crate::catalog::$marker for $ty {}
    };
    (query $($rest:tt)*) => {
        operation!(@impl Query QueryOperation $($rest)*);
    };
    (mutation $($rest:tt)*) => {
        operation!(@impl Mutation MutationOperation $($rest)*);
    };
}

