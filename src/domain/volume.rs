use crate::core::element::Value;
use crate::core::schema::FieldKind;
use crate::core::{WireScalar, ADMIN_NAMESPACE};
use crate::utils::error::{Result, SoapError};
use std::fmt;

/// Store volume role. Carried as a small integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeType {
    PrimaryMessage,
    SecondaryMessage,
    Index,
}

impl VolumeType {
    pub const ALL: &'static [Self] = &[Self::PrimaryMessage, Self::SecondaryMessage, Self::Index];
    pub const WIRE_VALUES: &'static [&'static str] = &["1", "2", "10"];

    pub const fn code(self) -> i16 {
        match self {
            Self::PrimaryMessage => 1,
            Self::SecondaryMessage => 2,
            Self::Index => 10,
        }
    }

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Self::PrimaryMessage),
            2 => Ok(Self::SecondaryMessage),
            10 => Ok(Self::Index),
            other => Err(Self::unknown(other.to_string())),
        }
    }

    fn unknown(value: String) -> SoapError {
        SoapError::InvalidEnumValue {
            kind: "volume type",
            value,
            valid: Some(Self::WIRE_VALUES),
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl WireScalar for VolumeType {
    const KIND: FieldKind = FieldKind::Enum(Self::WIRE_VALUES);

    fn to_value(&self) -> Value {
        Value::Int(i64::from(self.code()))
    }

    fn from_value(value: &Value, _field: &str) -> Result<Self> {
        match value {
            Value::Int(code) => Self::from_code(*code),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(code) => Self::from_code(code),
                Err(_) => Err(Self::unknown(s.clone())),
            },
            Value::Bool(b) => Err(Self::unknown(b.to_string())),
        }
    }
}

crate::impl_scalar_slot!(VolumeType);

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VolumeInfo in "volume" {
        /// Assigned by the server; absent on create.
        pub id: Option<i16> = attr("id"),
        pub kind: VolumeType = attr("type"),
        pub name: String = attr("name"),
        pub root_path: String = attr("rootpath"),
        pub mailbox_group_bits: Option<i16> = attr("mgbits"),
        pub mailbox_bits: Option<i16> = attr("mbits"),
        pub file_group_bits: Option<i16> = attr("fgbits"),
        pub file_bits: Option<i16> = attr("fbits"),
        pub compress_blobs: Option<bool> = attr("compressBlobs"),
        pub compression_threshold: Option<i64> = attr("compressionThreshold"),
        pub is_current: Option<bool> = attr("isCurrent"),
    }
}

impl VolumeInfo {
    pub fn new(kind: VolumeType, name: impl Into<String>, root_path: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            name: name.into(),
            root_path: root_path.into(),
            mailbox_group_bits: None,
            mailbox_bits: None,
            file_group_bits: None,
            file_bits: None,
            compress_blobs: None,
            compression_threshold: None,
            is_current: None,
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CurrentVolumeInfo in "volume" {
        pub kind: VolumeType = attr("type"),
        pub id: i16 = attr("id"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllVolumesRequest in "GetAllVolumesRequest" in ADMIN_NAMESPACE {}
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetAllVolumesResponse in "GetAllVolumesResponse" in ADMIN_NAMESPACE {
        pub volumes: Vec<VolumeInfo> = list("volume"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetCurrentVolumesRequest in "GetCurrentVolumesRequest" in ADMIN_NAMESPACE {}
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct GetCurrentVolumesResponse in "GetCurrentVolumesResponse" in ADMIN_NAMESPACE {
        pub volumes: Vec<CurrentVolumeInfo> = list("volume"),
    }
}

impl GetCurrentVolumesResponse {
    pub fn current(&self, kind: VolumeType) -> Option<i16> {
        self.volumes.iter().find(|v| v.kind == kind).map(|v| v.id)
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateVolumeRequest in "CreateVolumeRequest" in ADMIN_NAMESPACE {
        pub volume: VolumeInfo = child("volume"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateVolumeResponse in "CreateVolumeResponse" in ADMIN_NAMESPACE {
        pub volume: VolumeInfo = child("volume"),
    }
}
