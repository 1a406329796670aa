//! Name to wire type lookup, used where the type is only known at runtime.

use crate::core::element::Element;
use crate::core::schema::{self, FieldKind, FieldSpec, Finding};
use crate::core::wire::WireObject;
use crate::domain::*;
use crate::utils::error::{Result, SoapError};
use std::fmt::Write as _;
use std::sync::OnceLock;

/// Type-erased view of a `WireObject`.
#[derive(Debug, Clone, Copy)]
pub struct WireType {
    /// Rust type name without its module path.
    pub name: &'static str,
    pub element: &'static str,
    pub namespace: Option<&'static str>,
    pub schema: &'static [FieldSpec],
    normalizer: fn(&Element) -> Result<Element>,
}

impl WireType {
    pub fn of<T: WireObject>() -> Self {
        let full = std::any::type_name::<T>();
        Self {
            name: full.rsplit("::").next().unwrap_or(full),
            element: T::ELEMENT,
            namespace: T::NAMESPACE,
            schema: T::SCHEMA,
            normalizer: normalize::<T>,
        }
    }

    /// Top-level request or response, as opposed to a nested shape.
    pub fn is_message(&self) -> bool {
        self.namespace.is_some()
    }

    /// Decodes `element` as this type and encodes it again, which drops
    /// unknown content and canonicalizes values. The root must be this
    /// type's element.
    pub fn normalize(&self, element: &Element) -> Result<Element> {
        (self.normalizer)(element)
    }

    pub fn check(&self, element: &Element) -> Vec<Finding> {
        schema::check(self.schema, element)
    }

    /// Indented field table, nested objects expanded in place.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} <{}>", self.name, self.element);
        if let Some(namespace) = self.namespace {
            let _ = writeln!(out, "  namespace {namespace}");
        }
        describe_fields(self.schema, 1, &mut out);
        out
    }
}

fn describe_fields(fields: &[FieldSpec], depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    for spec in fields {
        let presence = if spec.required { "required" } else { "optional" };
        let _ = writeln!(
            out,
            "{pad}{:<24} {:<28} {:<10} {}",
            spec.field,
            spec.wire_path(),
            presence,
            spec.kind
        );
        if let FieldKind::Object { schema, .. } = spec.kind {
            describe_fields(schema, depth + 1, out);
        }
    }
}

fn normalize<T: WireObject>(element: &Element) -> Result<Element> {
    if element.name() != T::ELEMENT {
        return Err(SoapError::UnexpectedElement {
            expected: T::ELEMENT.to_string(),
            found: element.name().to_string(),
        });
    }
    Ok(T::from_element(element)?.to_element())
}

macro_rules! wire_types {
    ($($ty:ty),+ $(,)?) => {
        vec![$(WireType::of::<$ty>()),+]
    };
}

/// Every known type. Messages come first so an element name shared by a
/// message and a nested shape resolves to the message.
pub fn all() -> &'static [WireType] {
    static REGISTRY: OnceLock<Vec<WireType>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        wire_types![
            // messages
            BackupRequest,
            BackupResponse,
            CreateDataSourceRequest,
            CreateDataSourceResponse,
            CreateVolumeRequest,
            CreateVolumeResponse,
            DeleteMailboxRequest,
            DeleteMailboxResponse,
            FlushCacheRequest,
            FlushCacheResponse,
            GetAllCosRequest,
            GetAllCosResponse,
            GetAllServersRequest,
            GetAllServersResponse,
            GetAllUcServicesRequest,
            GetAllUcServicesResponse,
            GetAllVolumesRequest,
            GetAllVolumesResponse,
            GetCurrentVolumesRequest,
            GetCurrentVolumesResponse,
            GetDataSourcesRequest,
            GetDataSourcesResponse,
            GetMailboxRequest,
            GetMailboxResponse,
            GetServerRequest,
            GetServerResponse,
            GetUcServiceRequest,
            GetUcServiceResponse,
            MailQueueActionRequest,
            MailQueueActionResponse,
            PurgeMessagesRequest,
            PurgeMessagesResponse,
            // nested shapes
            AccountBackupInfo,
            AccountInfo,
            Attr,
            BackupHostAccounts,
            BackupResult,
            BackupSpec,
            CacheEntrySelector,
            CacheSelector,
            CosInfo,
            CurrentVolumeInfo,
            DataSourceInfo,
            DataSourceSpecifier,
            DomainInfo,
            MailQueueAction,
            MailQueueWithAction,
            MailboxByAccountIdSelector,
            MailboxWithMailboxId,
            NamedElement,
            QueueQuery,
            QueueQueryField,
            ServerInfo,
            ServerSelector,
            ServerWithQueueAction,
            UcServiceInfo,
            UcServiceSelector,
            ValueAttrib,
            VoiceProviderInfo,
            VolumeInfo,
        ]
    })
}

/// Looks up by Rust type name first, then by element name. An element name
/// shared by several nested types is rejected with the candidates listed.
pub fn find(name: &str) -> Result<&'static WireType> {
    let types = all();
    if let Some(ty) = types.iter().find(|ty| ty.name == name) {
        return Ok(ty);
    }
    if let Some(ty) = types.iter().find(|ty| ty.is_message() && ty.element == name) {
        return Ok(ty);
    }

    let matches: Vec<&'static WireType> = types.iter().filter(|ty| ty.element == name).collect();
    match matches.as_slice() {
        [] => Err(SoapError::UnknownType(name.to_string())),
        [ty] => Ok(*ty),
        _ => Err(SoapError::AmbiguousType {
            name: name.to_string(),
            candidates: matches.iter().map(|ty| ty.name).collect::<Vec<_>>().join(", "),
        }),
    }
}

/// The message registered for a document root, if any.
pub fn for_root(root: &Element) -> Option<&'static WireType> {
    all()
        .iter()
        .find(|ty| ty.is_message() && ty.element == root.name())
}
