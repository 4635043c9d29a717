//! Generates the typed binding set of a contract.

/// Encodes constructor arguments, or nothing for a constructor-less
/// contract.
macro_rules! constructor_args {
    ($abi:ident;) => {
        ::std::vec::Vec::<u8>::new()
    };
    ($abi:ident; $($arg:ident),+) => {
        ::alloy::sol_types::SolConstructor::abi_encode(
            &$abi::constructorCall { $($arg),+ },
        )
    };
}

/// Generates the binding set of a contract declared with `sol!`.
///
/// For a contract `Name` this produces `Name` (holding the three roles),
/// `NameCaller`, `NameTransactor`, `NameFilterer`, `NameSession` and a
/// deploy function. The plain value transfer of the transactor is
/// `transfer_value`, leaving `transfer` free for token methods. Argument
/// names must match the parameter names of the `sol!` declaration.
///
/// ```ignore
/// bind! {
///     /// Bindings for `Controlled`.
///     Controlled(IControlled) {
///         roles: ControlledCaller, ControlledTransactor, ControlledFilterer, ControlledSession;
///         deploy: deploy_controlled();
///         calls {
///             fn controller() -> controllerCall;
///         }
///         transactions {
///             fn change_controller(new_controller: Address) -> changeControllerCall;
///         }
///         events {
///             NewController() => filter_new_controller, watch_new_controller, parse_new_controller;
///         }
///     }
/// }
/// ```
macro_rules! bind {
    (
        $(#[$doc:meta])*
        $name:ident($abi:ident) {
            roles: $caller:ident, $transactor:ident, $filterer:ident, $session:ident;
            deploy: $deploy:ident($($ctor:ident: $ctor_ty:ty),* $(,)?);
            calls {
                $(fn $call_fn:ident($($call_arg:ident: $call_ty:ty),* $(,)?) -> $call:ident;)*
            }
            transactions {
                $(fn $tx_fn:ident($($tx_arg:ident: $tx_ty:ty),* $(,)?) -> $tx:ident;)*
            }
            events {
                $($event:ident($($topic:ident: $topic_ty:ty),* $(,)?) => $filter_fn:ident, $watch_fn:ident, $parse_fn:ident;)*
            }
        }
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<B> {
            /// Read-only methods.
            pub caller: $caller<B>,
            /// State-changing methods.
            pub transactor: $transactor<B>,
            /// Event logs.
            pub filterer: $filterer<B>,
            contract: $crate::bind::BoundContract<B>,
        }

        impl<B: Clone> $name<B> {
            #[doc = concat!("Binds a deployed `", stringify!($name), "` at `address`.")]
            pub fn new(address: ::alloy::primitives::Address, backend: B) -> Self {
                let contract = $crate::bind::BoundContract::new(address, backend);
                Self {
                    caller: $caller { contract: contract.clone() },
                    transactor: $transactor { contract: contract.clone() },
                    filterer: $filterer { contract: contract.clone() },
                    contract,
                }
            }

            /// Address of the contract.
            pub fn address(&self) -> ::alloy::primitives::Address {
                self.contract.address()
            }

            /// The untyped bound contract.
            pub fn raw(&self) -> &$crate::bind::BoundContract<B> {
                &self.contract
            }

            /// A session that pins call and transaction options.
            pub fn session(
                &self,
                call_opts: $crate::bind::CallOpts,
                transact_opts: $crate::bind::TransactOpts,
            ) -> $session<B> {
                $session { contract: self.contract.clone(), call_opts, transact_opts }
            }
        }

        #[doc = concat!("Read-only binding of `", stringify!($name), "`.")]
        #[derive(Clone, Debug)]
        pub struct $caller<B> {
            #[allow(dead_code)]
            contract: $crate::bind::BoundContract<B>,
        }

        impl<B: $crate::backend::Backend> $caller<B> {
            #[doc = concat!("Binds the read-only methods of a `", stringify!($name), "` at `address`.")]
            pub fn new(address: ::alloy::primitives::Address, backend: B) -> Self {
                Self { contract: $crate::bind::BoundContract::new(address, backend) }
            }

            $(
                #[doc = concat!("Calls `", stringify!($call), "`.")]
                pub async fn $call_fn(
                    &self,
                    opts: &$crate::bind::CallOpts,
                    $($call_arg: $call_ty),*
                ) -> $crate::Result<<$abi::$call as ::alloy::sol_types::SolCall>::Return> {
                    self.contract.call(opts, &$abi::$call { $($call_arg),* }).await
                }
            )*
        }

        #[doc = concat!("State-changing binding of `", stringify!($name), "`.")]
        #[derive(Clone, Debug)]
        pub struct $transactor<B> {
            contract: $crate::bind::BoundContract<B>,
        }

        impl<B: $crate::backend::Backend> $transactor<B> {
            #[doc = concat!("Binds the state-changing methods of a `", stringify!($name), "` at `address`.")]
            pub fn new(address: ::alloy::primitives::Address, backend: B) -> Self {
                Self { contract: $crate::bind::BoundContract::new(address, backend) }
            }

            /// Sends plain value to the contract, invoking its fallback.
            pub async fn transfer_value(
                &self,
                opts: &$crate::bind::TransactOpts,
            ) -> $crate::Result<::alloy::primitives::TxHash> {
                self.contract.transfer(opts).await
            }

            $(
                #[doc = concat!("Sends `", stringify!($tx), "`.")]
                pub async fn $tx_fn(
                    &self,
                    opts: &$crate::bind::TransactOpts,
                    $($tx_arg: $tx_ty),*
                ) -> $crate::Result<::alloy::primitives::TxHash> {
                    self.contract.transact(opts, &$abi::$tx { $($tx_arg),* }).await
                }
            )*
        }

        #[doc = concat!("Event log binding of `", stringify!($name), "`.")]
        #[derive(Clone, Debug)]
        pub struct $filterer<B> {
            #[allow(dead_code)]
            contract: $crate::bind::BoundContract<B>,
        }

        impl<B: $crate::backend::Backend> $filterer<B> {
            #[doc = concat!("Binds the events of a `", stringify!($name), "` at `address`.")]
            pub fn new(address: ::alloy::primitives::Address, backend: B) -> Self {
                Self { contract: $crate::bind::BoundContract::new(address, backend) }
            }

            $(
                #[doc = concat!("Iterates over past `", stringify!($event), "` events.")]
                pub async fn $filter_fn(
                    &self,
                    opts: &$crate::bind::FilterOpts,
                    $($topic: &[$topic_ty]),*
                ) -> $crate::Result<$crate::event::EventIterator<$abi::$event>> {
                    self.contract
                        .filter_logs::<$abi::$event>(opts, vec![$($crate::event::topic($topic)),*])
                        .await
                }

                #[doc = concat!("Forwards new `", stringify!($event), "` events into `sink`.")]
                pub async fn $watch_fn(
                    &self,
                    opts: &$crate::bind::WatchOpts,
                    sink: ::tokio::sync::mpsc::Sender<$crate::event::DecodedLog<$abi::$event>>,
                    $($topic: &[$topic_ty]),*
                ) -> $crate::Result<$crate::event::Subscription> {
                    self.contract
                        .watch_logs::<$abi::$event>(opts, vec![$($crate::event::topic($topic)),*], sink)
                        .await
                }

                #[doc = concat!("Decodes a raw log as `", stringify!($event), "`.")]
                pub fn $parse_fn(
                    &self,
                    log: &::alloy::rpc::types::Log,
                ) -> $crate::Result<$crate::event::DecodedLog<$abi::$event>> {
                    self.contract.unpack_log::<$abi::$event>(log)
                }
            )*
        }

        #[doc = concat!("Binding of `", stringify!($name), "` with pinned options.")]
        #[derive(Clone, Debug)]
        pub struct $session<B> {
            contract: $crate::bind::BoundContract<B>,
            /// Options used for every call.
            pub call_opts: $crate::bind::CallOpts,
            /// Options used for every transaction.
            pub transact_opts: $crate::bind::TransactOpts,
        }

        impl<B: $crate::backend::Backend> $session<B> {
            /// Address of the contract.
            pub fn address(&self) -> ::alloy::primitives::Address {
                self.contract.address()
            }

            $(
                #[doc = concat!("Calls `", stringify!($call), "` with the session's call options.")]
                pub async fn $call_fn(
                    &self,
                    $($call_arg: $call_ty),*
                ) -> $crate::Result<<$abi::$call as ::alloy::sol_types::SolCall>::Return> {
                    self.contract.call(&self.call_opts, &$abi::$call { $($call_arg),* }).await
                }
            )*

            $(
                #[doc = concat!("Sends `", stringify!($tx), "` with the session's transaction options.")]
                pub async fn $tx_fn(
                    &self,
                    $($tx_arg: $tx_ty),*
                ) -> $crate::Result<::alloy::primitives::TxHash> {
                    self.contract.transact(&self.transact_opts, &$abi::$tx { $($tx_arg),* }).await
                }
            )*
        }

        #[doc = concat!("Deploys `", stringify!($name), "` from its creation `bytecode`.")]
        pub async fn $deploy<B: $crate::backend::Backend + Clone>(
            backend: B,
            opts: &$crate::bind::TransactOpts,
            bytecode: &[u8],
            $($ctor: $ctor_ty),*
        ) -> $crate::Result<($name<B>, ::alloy::primitives::TxHash)> {
            let args = constructor_args!($abi; $($ctor),*);
            let (address, hash) =
                $crate::deploy::deploy(&backend, opts, bytecode, &args).await?;
            Ok(($name::new(address, backend), hash))
        }
    };
}
