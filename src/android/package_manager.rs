pub mod IPackageManager {
    #![allow(non_upper_case_globals, non_snake_case, dead_code)]
    use crate::android::package_installer::IPackageInstaller::IPackageInstaller;

    /// Mirror of the hidden `android.content.pm.IPackageManager` surface,
    /// reduced to the one call this service performs on it.
    pub trait IPackageManager: rsbinder::Interface + Send {
        fn descriptor() -> &'static str
        where
            Self: Sized,
        {
            "android.content.pm.IPackageManager"
        }
        fn r#getPackageInstaller(
            &self,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstaller>>;
    }

    pub(crate) mod transactions {
        pub(crate) const r#getPackageInstaller: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 0;
    }

    rsbinder::declare_binder_interface! {
        IPackageManager["android.content.pm.IPackageManager"] {
            native: {
                BnPackageManager(on_transact),
                adapter: BnPackageManagerAdapter,
                r#async: IPackageManager,
            },
            proxy: BpPackageManager,
        }
    }

    impl BpPackageManager {
        fn build_parcel_getPackageInstaller(&self) -> rsbinder::Result<rsbinder::Parcel> {
            let data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            Ok(data)
        }
        fn read_response_getPackageInstaller(
            &self,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstaller>> {
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            let _aidl_return: rsbinder::Strong<dyn IPackageInstaller> = _aidl_reply.read()?;
            Ok(_aidl_return)
        }
    }

    impl IPackageManager for BpPackageManager {
        fn r#getPackageInstaller(
            &self,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstaller>> {
            let _aidl_data = self.build_parcel_getPackageInstaller()?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#getPackageInstaller,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_getPackageInstaller(_aidl_reply)
        }
    }

    impl IPackageManager for rsbinder::Binder<BnPackageManager> {
        fn r#getPackageInstaller(
            &self,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstaller>> {
            self.0.r#getPackageInstaller()
        }
    }

    fn on_transact(
        _service: &dyn IPackageManager,
        _code: rsbinder::TransactionCode,
        _reader: &mut rsbinder::Parcel,
        _reply: &mut rsbinder::Parcel,
    ) -> rsbinder::Result<()> {
        match _code {
            transactions::r#getPackageInstaller => {
                let _aidl_return = _service.r#getPackageInstaller();
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
