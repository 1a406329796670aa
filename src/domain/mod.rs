// Admin protocol DTOs. Each type declares its wire shape through `wire_object!`
// or `wire_enum!`; marshaling lives in `crate::core`.

pub mod account;
pub mod backup;
pub mod cache;
pub mod common;
pub mod datasource;
pub mod mailbox;
pub mod queue;
pub mod server;
pub mod ucservice;
pub mod voice;
pub mod volume;

pub use account::{AccountInfo, CosInfo, DomainInfo, GetAllCosRequest, GetAllCosResponse};
pub use backup::{
    AccountBackupInfo, BackupHostAccounts, BackupMethod, BackupRequest, BackupResponse,
    BackupResult, BackupSpec,
};
pub use cache::{
    CacheEntryBy, CacheEntrySelector, CacheEntryType, CacheSelector, FlushCacheRequest,
    FlushCacheResponse,
};
pub use common::{Attr, NamedElement, ValueAttrib};
pub use datasource::{
    CreateDataSourceRequest, CreateDataSourceResponse, DataSourceInfo, DataSourceSpecifier,
    DataSourceType, GetDataSourcesRequest, GetDataSourcesResponse,
};
pub use mailbox::{
    DeleteMailboxRequest, DeleteMailboxResponse, GetMailboxRequest, GetMailboxResponse,
    MailboxByAccountIdSelector, MailboxWithMailboxId, PurgeMessagesRequest, PurgeMessagesResponse,
};
pub use queue::{
    MailQueueAction, MailQueueActionRequest, MailQueueActionResponse, MailQueueWithAction,
    QueueAction, QueueActionBy, QueueQuery, QueueQueryField, ServerWithQueueAction,
};
pub use server::{
    GetAllServersRequest, GetAllServersResponse, GetServerRequest, GetServerResponse, ServerBy,
    ServerInfo, ServerSelector,
};
pub use ucservice::{
    GetAllUcServicesRequest, GetAllUcServicesResponse, GetUcServiceRequest, GetUcServiceResponse,
    UcServiceBy, UcServiceInfo, UcServiceSelector,
};
pub use voice::VoiceProviderInfo;
pub use volume::{
    CreateVolumeRequest, CreateVolumeResponse, CurrentVolumeInfo, GetAllVolumesRequest,
    GetAllVolumesResponse, GetCurrentVolumesRequest, GetCurrentVolumesResponse, VolumeInfo,
    VolumeType,
};
