use rsbinder::{Parcel, Parcelable};

use crate::consts::{MODE_FULL_INSTALL, PACKAGE_SOURCE_UNSPECIFIED};

/// Parameters for a new install session
/// (`android.content.pm.PackageInstaller.SessionParams`), reduced to the
/// fields the privileged install path writes.
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct SessionParams {
    pub mode: i32,
    pub installFlags: i32,
    pub packageSource: i32,
    pub installerPackageName: Option<String>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            mode: MODE_FULL_INSTALL,
            installFlags: 0,
            packageSource: PACKAGE_SOURCE_UNSPECIFIED,
            installerPackageName: None,
        }
    }
}

impl Parcelable for SessionParams {
    fn write_to_parcel(&self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        parcel.write(&self.mode)?;
        parcel.write(&self.installFlags)?;
        parcel.write(&self.packageSource)?;
        parcel.write(&self.installerPackageName)?;
        Ok(())
    }

    fn read_from_parcel(&mut self, parcel: &mut Parcel) -> rsbinder::Result<()> {
        self.mode = parcel.read()?;
        self.installFlags = parcel.read()?;
        self.packageSource = parcel.read()?;
        self.installerPackageName = parcel.read()?;
        Ok(())
    }
}

rsbinder::impl_serialize_for_parcelable!(SessionParams);
rsbinder::impl_deserialize_for_parcelable!(SessionParams);

pub mod IPackageInstaller {
    #![allow(non_upper_case_globals, non_snake_case, dead_code)]
    use super::IPackageInstallerSession::IPackageInstallerSession;
    use super::SessionParams;

    /// Mirror of the hidden `android.content.pm.IPackageInstaller` surface.
    /// `createSession` kept both historical argument shapes: the attribution
    /// tag argument only exists on S and later releases.
    pub trait IPackageInstaller: rsbinder::Interface + Send {
        fn descriptor() -> &'static str
        where
            Self: Sized,
        {
            "android.content.pm.IPackageInstaller"
        }
        fn r#createSession(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_installerAttributionTag: Option<&str>,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32>;
        fn r#createSessionLegacy(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32>;
        fn r#openSession(
            &self,
            _arg_sessionId: i32,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstallerSession>>;
    }

    pub(crate) mod transactions {
        pub(crate) const r#createSession: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 0;
        pub(crate) const r#createSessionLegacy: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 1;
        pub(crate) const r#openSession: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 2;
    }

    rsbinder::declare_binder_interface! {
        IPackageInstaller["android.content.pm.IPackageInstaller"] {
            native: {
                BnPackageInstaller(on_transact),
                adapter: BnPackageInstallerAdapter,
                r#async: IPackageInstaller,
            },
            proxy: BpPackageInstaller,
        }
    }

    impl BpPackageInstaller {
        fn build_parcel_createSession(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_installerAttributionTag: Option<&str>,
            _arg_userId: i32,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_params)?;
            data.write(_arg_installerPackageName)?;
            data.write(&_arg_installerAttributionTag)?;
            data.write(&_arg_userId)?;
            Ok(data)
        }
        fn read_response_createSession(
            &self,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<i32> {
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            let _aidl_return: i32 = _aidl_reply.read()?;
            Ok(_aidl_return)
        }
        fn build_parcel_createSessionLegacy(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_userId: i32,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_params)?;
            data.write(_arg_installerPackageName)?;
            data.write(&_arg_userId)?;
            Ok(data)
        }
        fn build_parcel_openSession(
            &self,
            _arg_sessionId: i32,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(&_arg_sessionId)?;
            Ok(data)
        }
        fn read_response_openSession(
            &self,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstallerSession>> {
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            let _aidl_return: rsbinder::Strong<dyn IPackageInstallerSession> =
                _aidl_reply.read()?;
            Ok(_aidl_return)
        }
    }

    impl IPackageInstaller for BpPackageInstaller {
        fn r#createSession(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_installerAttributionTag: Option<&str>,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32> {
            let _aidl_data = self.build_parcel_createSession(
                _arg_params,
                _arg_installerPackageName,
                _arg_installerAttributionTag,
                _arg_userId,
            )?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#createSession,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_createSession(_aidl_reply)
        }
        fn r#createSessionLegacy(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32> {
            let _aidl_data = self.build_parcel_createSessionLegacy(
                _arg_params,
                _arg_installerPackageName,
                _arg_userId,
            )?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#createSessionLegacy,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_createSession(_aidl_reply)
        }
        fn r#openSession(
            &self,
            _arg_sessionId: i32,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstallerSession>> {
            let _aidl_data = self.build_parcel_openSession(_arg_sessionId)?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#openSession,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_openSession(_aidl_reply)
        }
    }

    impl IPackageInstaller for rsbinder::Binder<BnPackageInstaller> {
        fn r#createSession(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_installerAttributionTag: Option<&str>,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32> {
            self.0.r#createSession(
                _arg_params,
                _arg_installerPackageName,
                _arg_installerAttributionTag,
                _arg_userId,
            )
        }
        fn r#createSessionLegacy(
            &self,
            _arg_params: &SessionParams,
            _arg_installerPackageName: &str,
            _arg_userId: i32,
        ) -> rsbinder::status::Result<i32> {
            self.0
                .r#createSessionLegacy(_arg_params, _arg_installerPackageName, _arg_userId)
        }
        fn r#openSession(
            &self,
            _arg_sessionId: i32,
        ) -> rsbinder::status::Result<rsbinder::Strong<dyn IPackageInstallerSession>> {
            self.0.r#openSession(_arg_sessionId)
        }
    }

    fn on_transact(
        _service: &dyn IPackageInstaller,
        _code: rsbinder::TransactionCode,
        _reader: &mut rsbinder::Parcel,
        _reply: &mut rsbinder::Parcel,
    ) -> rsbinder::Result<()> {
        match _code {
            transactions::r#createSession => {
                let _arg_params: SessionParams = _reader.read()?;
                let _arg_installerPackageName: String = _reader.read()?;
                let _arg_installerAttributionTag: Option<String> = _reader.read()?;
                let _arg_userId: i32 = _reader.read()?;
                let _aidl_return = _service.r#createSession(
                    &_arg_params,
                    &_arg_installerPackageName,
                    _arg_installerAttributionTag.as_deref(),
                    _arg_userId,
                );
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
            transactions::r#createSessionLegacy => {
                let _arg_params: SessionParams = _reader.read()?;
                let _arg_installerPackageName: String = _reader.read()?;
                let _arg_userId: i32 = _reader.read()?;
                let _aidl_return = _service.r#createSessionLegacy(
                    &_arg_params,
                    &_arg_installerPackageName,
                    _arg_userId,
                );
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
            transactions::r#openSession => {
                let _arg_sessionId: i32 = _reader.read()?;
                let _aidl_return = _service.r#openSession(_arg_sessionId);
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

pub mod IPackageInstallerSession {
    #![allow(non_upper_case_globals, non_snake_case, dead_code)]
    use crate::android::intent_receiver::IIntentReceiver::IIntentReceiver;

    /// Mirror of the hidden `android.content.pm.IPackageInstallerSession`
    /// surface: one write stream per archive, durability barrier, commit
    /// with a completion callback, abandon.
    pub trait IPackageInstallerSession: rsbinder::Interface + Send {
        fn descriptor() -> &'static str
        where
            Self: Sized,
        {
            "android.content.pm.IPackageInstallerSession"
        }
        fn r#openWrite(
            &self,
            _arg_name: &str,
            _arg_offsetBytes: i64,
            _arg_lengthBytes: i64,
        ) -> rsbinder::status::Result<rsbinder::ParcelFileDescriptor>;
        fn r#fsync(&self, _arg_name: &str) -> rsbinder::status::Result<()>;
        fn r#commit(
            &self,
            _arg_callback: &rsbinder::Strong<dyn IIntentReceiver>,
        ) -> rsbinder::status::Result<()>;
        fn r#abandon(&self) -> rsbinder::status::Result<()>;
    }

    pub(crate) mod transactions {
        pub(crate) const r#openWrite: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 0;
        pub(crate) const r#fsync: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 1;
        pub(crate) const r#commit: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 2;
        pub(crate) const r#abandon: rsbinder::TransactionCode =
            rsbinder::FIRST_CALL_TRANSACTION + 3;
    }

    rsbinder::declare_binder_interface! {
        IPackageInstallerSession["android.content.pm.IPackageInstallerSession"] {
            native: {
                BnPackageInstallerSession(on_transact),
                adapter: BnPackageInstallerSessionAdapter,
                r#async: IPackageInstallerSession,
            },
            proxy: BpPackageInstallerSession,
        }
    }

    impl BpPackageInstallerSession {
        fn build_parcel_openWrite(
            &self,
            _arg_name: &str,
            _arg_offsetBytes: i64,
            _arg_lengthBytes: i64,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_name)?;
            data.write(&_arg_offsetBytes)?;
            data.write(&_arg_lengthBytes)?;
            Ok(data)
        }
        fn read_response_openWrite(
            &self,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<rsbinder::ParcelFileDescriptor> {
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            let _aidl_return: rsbinder::ParcelFileDescriptor = _aidl_reply.read()?;
            Ok(_aidl_return)
        }
        fn build_parcel_fsync(&self, _arg_name: &str) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_name)?;
            Ok(data)
        }
        fn build_parcel_commit(
            &self,
            _arg_callback: &rsbinder::Strong<dyn IIntentReceiver>,
        ) -> rsbinder::Result<rsbinder::Parcel> {
            let mut data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            data.write(_arg_callback)?;
            Ok(data)
        }
        fn build_parcel_abandon(&self) -> rsbinder::Result<rsbinder::Parcel> {
            let data = self.binder.as_proxy().unwrap().prepare_transact(true)?;
            Ok(data)
        }
        fn read_response_unit(
            &self,
            _aidl_reply: rsbinder::Result<Option<rsbinder::Parcel>>,
        ) -> rsbinder::status::Result<()> {
            let mut _aidl_reply = _aidl_reply?.ok_or(rsbinder::StatusCode::UnexpectedNull)?;
            let _status = _aidl_reply.read::<rsbinder::Status>()?;
            if !_status.is_ok() {
                return Err(_status);
            }
            Ok(())
        }
    }

    impl IPackageInstallerSession for BpPackageInstallerSession {
        fn r#openWrite(
            &self,
            _arg_name: &str,
            _arg_offsetBytes: i64,
            _arg_lengthBytes: i64,
        ) -> rsbinder::status::Result<rsbinder::ParcelFileDescriptor> {
            let _aidl_data =
                self.build_parcel_openWrite(_arg_name, _arg_offsetBytes, _arg_lengthBytes)?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#openWrite,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_openWrite(_aidl_reply)
        }
        fn r#fsync(&self, _arg_name: &str) -> rsbinder::status::Result<()> {
            let _aidl_data = self.build_parcel_fsync(_arg_name)?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#fsync,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_unit(_aidl_reply)
        }
        fn r#commit(
            &self,
            _arg_callback: &rsbinder::Strong<dyn IIntentReceiver>,
        ) -> rsbinder::status::Result<()> {
            let _aidl_data = self.build_parcel_commit(_arg_callback)?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#commit,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_unit(_aidl_reply)
        }
        fn r#abandon(&self) -> rsbinder::status::Result<()> {
            let _aidl_data = self.build_parcel_abandon()?;
            let _aidl_reply = self.binder.as_proxy().unwrap().submit_transact(
                transactions::r#abandon,
                &_aidl_data,
                rsbinder::FLAG_CLEAR_BUF,
            );
            self.read_response_unit(_aidl_reply)
        }
    }

    impl IPackageInstallerSession for rsbinder::Binder<BnPackageInstallerSession> {
        fn r#openWrite(
            &self,
            _arg_name: &str,
            _arg_offsetBytes: i64,
            _arg_lengthBytes: i64,
        ) -> rsbinder::status::Result<rsbinder::ParcelFileDescriptor> {
            self.0
                .r#openWrite(_arg_name, _arg_offsetBytes, _arg_lengthBytes)
        }
        fn r#fsync(&self, _arg_name: &str) -> rsbinder::status::Result<()> {
            self.0.r#fsync(_arg_name)
        }
        fn r#commit(
            &self,
            _arg_callback: &rsbinder::Strong<dyn IIntentReceiver>,
        ) -> rsbinder::status::Result<()> {
            self.0.r#commit(_arg_callback)
        }
        fn r#abandon(&self) -> rsbinder::status::Result<()> {
            self.0.r#abandon()
        }
    }

    fn on_transact(
        _service: &dyn IPackageInstallerSession,
        _code: rsbinder::TransactionCode,
        _reader: &mut rsbinder::Parcel,
        _reply: &mut rsbinder::Parcel,
    ) -> rsbinder::Result<()> {
        match _code {
            transactions::r#openWrite => {
                let _arg_name: String = _reader.read()?;
                let _arg_offsetBytes: i64 = _reader.read()?;
                let _arg_lengthBytes: i64 = _reader.read()?;
                let _aidl_return =
                    _service.r#openWrite(&_arg_name, _arg_offsetBytes, _arg_lengthBytes);
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
            transactions::r#fsync => {
                let _arg_name: String = _reader.read()?;
                let _aidl_return = _service.r#fsync(&_arg_name);
                match &_aidl_return {
                    Ok(()) => {
                        _reply.write(&rsbinder::Status::from(rsbinder::StatusCode::Ok))?;
                    }
                    Err(_aidl_status) => {
                        _reply.write(_aidl_status)?;
                    }
                }
                Ok(())
            }
            transactions::r#commit => {
                let _arg_callback: rsbinder::Strong<
                    dyn crate::android::intent_receiver::IIntentReceiver::IIntentReceiver,
                > = _reader.read()?;
                let _aidl_return = _service.r#commit(&_arg_callback);
                match &_aidl_return {
                    Ok(()) => {
                        _reply.write(&rsbinder::Status::from(rsbinder::StatusCode::Ok))?;
                    }
                    Err(_aidl_status) => {
                        _reply.write(_aidl_status)?;
                    }
                }
                Ok(())
            }
            transactions::r#abandon => {
                let _aidl_return = _service.r#abandon();
                match &_aidl_return {
                    Ok(()) => {
                        _reply.write(&rsbinder::Status::from(rsbinder::StatusCode::Ok))?;
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
