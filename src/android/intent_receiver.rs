pub mod IIntentReceiver {
    #![allow(non_upper_case_globals, non_snake_case, dead_code)]
    use crate::android::intent::{Bundle, Intent};

    pub trait IIntentReceiver: rsbinder::Interface + Send {
        fn descriptor() -> &'static str
        where
            Self: Sized,
        {
            "android.content.IIntentReceiver"
        }
        fn r#performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
        ) -> rsbinder::status::Result<()>;
        fn getDefaultImpl() -> Option<IIntentReceiverDefaultRef>
        where
            Self: Sized,
        {
            DEFAULT_IMPL.get().cloned()
        }
        fn setDefaultImpl(d: IIntentReceiverDefaultRef) -> IIntentReceiverDefaultRef
        where
            Self: Sized,
        {
            DEFAULT_IMPL.get_or_init(|| d).clone()
        }
    }

    /// Inert receiver: the delivery is a one-way broadcast, so doing nothing
    /// is a valid (and never-failing) implementation.
    pub trait IIntentReceiverDefault: Send + Sync {
        fn r#performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
        ) -> rsbinder::status::Result<()> {
            Ok(())
        }
    }

    pub(crate) mod transactions {
        pub(crate) const r#performReceive: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 0;
    }

    pub type IIntentReceiverDefaultRef = std::sync::Arc<dyn IIntentReceiverDefault>;
    static DEFAULT_IMPL: std::sync::OnceLock<IIntentReceiverDefaultRef> =
        std::sync::OnceLock::new();

    rsbinder::declare_binder_interface! {
        IIntentReceiver["android.content.IIntentReceiver"] {
            native: {
                BnIntentReceiver(on_transact),
                adapter: BnIntentReceiverAdapter,
                r#async: IIntentReceiver,
            },
            proxy: BpIntentReceiver,
        }
    }

    impl BpIntentReceiver {
        fn build_parcel_performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_intent)?;
            data.write(&_arg_resultCode)?;
            data.write(&_arg_data)?;
            data.write(&_arg_extras)?;
            data.write(&_arg_ordered)?;
            data.write(&_arg_sticky)?;
            data.write(&_arg_sendingUser)?;
            Ok(data)
        }
        fn read_response_performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<()> {
            if let Err(rsbinder::StatusCode::UnknownTransaction) = _aidl_reply {
                if let Some(_aidl_default_impl) = <Self as IIntentReceiver>::getDefaultImpl() {
                    return _aidl_default_impl.r#performReceive(
                        _arg_intent,
                        _arg_resultCode,
                        _arg_data,
                        _arg_extras,
                        _arg_ordered,
                        _arg_sticky,
                        _arg_sendingUser,
                    );
                }
            }
            // oneway: no reply payload exists, success is the transaction
            // having been queued
            let _ = _aidl_reply?;
            Ok(())
        }
    }

    impl IIntentReceiver for BpIntentReceiver {
        fn r#performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
        ) -> rsbinder::status::Result<()> {
            let _aidl_data = self.build_parcel_performReceive(
                _arg_intent,
                _arg_resultCode,
                _arg_data,
                _arg_extras,
                _arg_ordered,
                _arg_sticky,
                _arg_sendingUser,
            )?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#performReceive,
                &_aidl_data,
                rsbinder::FLAG_ONEWAY | rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_performReceive(
                _arg_intent,
                _arg_resultCode,
                _arg_data,
                _arg_extras,
                _arg_ordered,
                _arg_sticky,
                _arg_sendingUser,
                _aidl_reply,
            )
        }
    }

    impl IIntentReceiver for rsbinder::Binder<BnIntentReceiver> {
        fn r#performReceive(
            &self,
            _arg_intent: &Intent,
            _arg_resultCode: i32,
            _arg_data: Option<&str>,
            _arg_extras: Option<&Bundle>,
            _arg_ordered: bool,
            _arg_sticky: bool,
            _arg_sendingUser: i32,
        ) -> rsbinder::status::Result<()> {
            self.0.r#performReceive(
                _arg_intent,
                _arg_resultCode,
                _arg_data,
                _arg_extras,
                _arg_ordered,
                _arg_sticky,
                _arg_sendingUser,
            )
        }
    }

    fn on_transact(
        _service: &dyn IIntentReceiver,
        _code: rsbinder::TransactionCode,
        _reader: &mut rsbinder::Parcel,
        _reply: &mut rsbinder::Parcel,
    ) -> rsbinder::Result<()> {
        match _code {
            transactions::r#performReceive => {
                let _arg_intent: Intent = _reader.read()?;
                let _arg_resultCode: i32 = _reader.read()?;
                let _arg_data: Option<String> = _reader.read()?;
                let _arg_extras: Option<Bundle> = _reader.read()?;
                let _arg_ordered: bool = _reader.read()?;
                let _arg_sticky: bool = _reader.read()?;
                let _arg_sendingUser: i32 = _reader.read()?;
                // oneway transaction, the caller never sees a status
                let _ = _service.r#performReceive(
                    &_arg_intent,
                    _arg_resultCode,
                    _arg_data.as_deref(),
                    _arg_extras.as_ref(),
                    _arg_ordered,
                    _arg_sticky,
                    _arg_sendingUser,
                );
                Ok(())
            }
            _ => Err(rsbinder::StatusCode::UnknownTransaction),
        }
    }
}
