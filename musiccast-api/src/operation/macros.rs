//! Declarative macros for Extended Control operation definitions
//!
//! Most receiver commands differ only in their path, their scope and the
//! names of a couple of query parameters. These macros turn a one-entry
//! table row into the request struct, the marker type and the
//! [`MusicCastOperation`](crate::operation::MusicCastOperation) impl.

/// Define one operation
///
/// The `service` decides the first path segment:
/// - `Zone` adds a `zone: Zone` field and uses its token (`main`, `zone2`, ...)
/// - `Source` adds a `source: Source` field (`netusb`, `cd`, `tuner`)
/// - any other [`Service`](crate::Service) variant uses its fixed path
///
/// # Example
/// ```rust,ignore
/// define_operation! {
///     operation: SetVolumeOperation,
///     command: "setVolume",
///     service: Zone,
///     request: { volume: u32 },
///     query: |req| { "volume" => req.volume },
///     response: Value,
/// }
/// ```
///
/// Optional `validate: |req| expr,` and `method: Post, body: |req| expr,`
/// entries may follow `query`.
#[macro_export]
macro_rules! define_operation {
    (
        operation: $op:ident,
        command: $command:literal,
        service: Zone,
        request: { $($field:ident: $ty:ty),* $(,)? },
        $($rest:tt)*
    ) => {
        $crate::define_operation! {
            @impl $op, $command,
            [zone: $crate::Zone, $($field: $ty),*],
            |request| request.zone.as_str(),
            $($rest)*
        }
    };
    (
        operation: $op:ident,
        command: $command:literal,
        service: Source,
        request: { $($field:ident: $ty:ty),* $(,)? },
        $($rest:tt)*
    ) => {
        $crate::define_operation! {
            @impl $op, $command,
            [source: $crate::Source, $($field: $ty),*],
            |request| request.source.path(),
            $($rest)*
        }
    };
    (
        operation: $op:ident,
        command: $command:literal,
        service: $service:ident,
        request: { $($field:ident: $ty:ty),* $(,)? },
        $($rest:tt)*
    ) => {
        $crate::define_operation! {
            @impl $op, $command,
            [$($field: $ty),*],
            |_request| $crate::Service::$service.path(),
            $($rest)*
        }
    };
    (
        @impl $op:ident, $command:literal,
        [$($field:ident: $ty:ty),* $(,)?],
        |$scope_req:ident| $scope:expr,
        query: |$req:ident| { $($key:literal => $value:expr),* $(,)? },
        $(validate: |$validate_req:ident| $validate:expr,)?
        $(method: $method:ident, body: |$body_req:ident| $body:expr,)?
        response: $response:ty $(,)?
    ) => {
        $crate::paste::paste! {
            #[derive(Debug, Clone, PartialEq)]
            pub struct [<$op Request>] {
                $(pub $field: $ty,)*
            }

            pub struct $op;

            impl $crate::operation::MusicCastOperation for $op {
                type Request = [<$op Request>];
                type Response = $response;

                const COMMAND: &'static str = $command;
                $(const METHOD: $crate::operation::Method = $crate::operation::Method::$method;)?

                fn scope($scope_req: &Self::Request) -> &str {
                    $scope
                }

                #[allow(unused_variables)]
                fn query($req: &Self::Request) -> Vec<(&'static str, Option<String>)> {
                    vec![$(($key, $crate::operation::QueryValue::to_query(&$value)),)*]
                }

                $(
                    fn validate(
                        $validate_req: &Self::Request,
                    ) -> Result<(), $crate::operation::ValidationError> {
                        $validate
                    }
                )?

                $(
                    fn body($body_req: &Self::Request) -> Option<$crate::operation::Value> {
                        Some($body)
                    }
                )?
            }
        }
    };
}

/// Define a boolean-flag operation: one `enabled: bool` field sent as
/// `param=true|false`
#[macro_export]
macro_rules! define_toggle_operation {
    (
        operation: $op:ident,
        command: $command:literal,
        service: $service:ident,
        param: $param:literal $(,)?
    ) => {
        $crate::define_operation! {
            operation: $op,
            command: $command,
            service: $service,
            request: { enabled: bool },
            query: |req| { $param => req.enabled },
            response: $crate::operation::Value,
        }
    };
}

/// Table form of [`define_toggle_operation!`] for endpoints sharing a
/// service and parameter name
///
/// ```rust,ignore
/// define_toggle_operations! {
///     service: Zone, param: "enable";
///     SetMuteOperation => "setMute",
///     SetDirectOperation => "setDirect",
/// }
/// ```
#[macro_export]
macro_rules! define_toggle_operations {
    (
        service: $service:ident, param: $param:literal;
        $($op:ident => $command:literal),* $(,)?
    ) => {
        $(
            $crate::define_toggle_operation! {
                operation: $op,
                command: $command,
                service: $service,
                param: $param,
            }
        )*
    };
}
