pub mod IInstallerService {
    #![allow(non_upper_case_globals, non_snake_case, dead_code)]

    pub trait IInstallerService: rsbinder::Interface + Send {
        fn descriptor() -> &'static str
        where
            Self: Sized,
        {
            "rsinstaller.IInstallerService"
        }
        /// Installs the given package archives in one atomic session.
        /// Returns `None` on success, a diagnostic message on failure.
        fn r#install(&self, _arg_apkPaths: &[String]) -> rsbinder::status::Result<Option<String>>;
        fn getDefaultImpl() -> Option<IInstallerServiceDefaultRef>
        where
            Self: Sized,
        {
            DEFAULT_IMPL.get().cloned()
        }
        fn setDefaultImpl(d: IInstallerServiceDefaultRef) -> IInstallerServiceDefaultRef
        where
            Self: Sized,
        {
            DEFAULT_IMPL.get_or_init(|| d).clone()
        }
    }

    pub trait IInstallerServiceDefault: Send + Sync {
        fn r#install(&self, _arg_apkPaths: &[String]) -> rsbinder::status::Result<Option<String>> {
            Err(rsbinder::StatusCode::UnknownTransaction.into())
        }
    }

    pub(crate) mod transactions {
        pub(crate) const r#install: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 0;
    }

    pub type IInstallerServiceDefaultRef = std::sync::Arc<dyn IInstallerServiceDefault>;
    static DEFAULT_IMPL: std::sync::OnceLock<IInstallerServiceDefaultRef> =
        std::sync::OnceLock::new();

    rsbinder::declare_binder_interface! {
        IInstallerService["rsinstaller.IInstallerService"] {
            native: {
                BnInstallerService(on_transact),
                adapter: BnInstallerServiceAdapter,
                r#async: IInstallerService,
            },
            proxy: BpInstallerService,
        }
    }

    impl BpInstallerService {
        fn build_parcel_install(
            &self,
            _arg_apkPaths: &[String],
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_apkPaths)?;
            Ok(data)
        }
        fn read_response_install(
            &self,
            _arg_apkPaths: &[String],
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<Option<String>> {
            if let Err(rsbinder::StatusCode::UnknownTransaction) = _aidl_reply {
                if let Some(_aidl_default_impl) = <Self as IInstallerService>::getDefaultImpl() {
                    return _aidl_default_impl.r#install(_arg_apkPaths);
                }
            }
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            let _aidl_return: Option<String> = _aidl_reply.read()?;
            Ok(_aidl_return)
        }
    }

    impl IInstallerService for BpInstallerService {
        fn r#install(&self, _arg_apkPaths: &[String]) -> rsbinder::status::Result<Option<String>> {
            let _aidl_data = self.build_parcel_install(_arg_apkPaths)?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#install,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_install(_arg_apkPaths, _aidl_reply)
        }
    }

    impl IInstallerService for rsbinder::Binder<BnInstallerService> {
        fn r#install(&self, _arg_apkPaths: &[String]) -> rsbinder::status::Result<Option<String>> {
            self.0.r#install(_arg_apkPaths)
        }
    }

    fn on_transact(
        _service: &dyn IInstallerService,
        _code: rsbinder::TransactionCode,
        _reader: &mut rsbinder::Parcel,
        _reply: &mut rsbinder::Parcel,
    ) -> rsbinder::Result<()> {
        match _code {
            transactions::r#install => {
                let _arg_apkPaths: Vec<String> = _reader.read()?;
                let _aidl_return = _service.r#install(&_arg_apkPaths);
                match &_aidl_return {
                    Ok(_aidl_return) => {
                        _reply.write(&rsbinder::Status::from(rsbinder::StatusCode::Ok))?;
                        _reply.write(_aidl_return)?;
                    }
                    Err(_aidl_status) => {
                        _reply.write(_aidl_status)?;
                    }
                }
                Ok(())
            }
            _ => Err(rsbinder::StatusCode::UnknownTransaction),
        }
    }
}
