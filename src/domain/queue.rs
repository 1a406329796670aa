//! Mail queue actions: hold, release, delete or requeue messages sitting in
//! an MTA queue, selected either by id list or by a field query.

use crate::core::ADMIN_NAMESPACE;
use crate::domain::common::ValueAttrib;

wire_enum! {
    pub enum QueueAction("queue action") {
        Hold = "hold",
        Release = "release",
        Delete = "delete",
        Requeue = "requeue",
    }
}

wire_enum! {
    pub enum QueueActionBy("queue action selector") {
        Id = "id",
        Query = "query",
    }
}

wire_object! {
    /// One query term; any of the `match` values selects a message.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct QueueQueryField in "field" {
        pub name: String = attr("name"),
        pub matches: Vec<ValueAttrib> = list("match"),
    }
}

impl QueueQueryField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matches: Vec::new(),
        }
    }

    pub fn with_match(mut self, value: impl Into<String>) -> Self {
        self.matches.push(ValueAttrib::new(value));
        self
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct QueueQuery in "query" {
        pub limit: Option<i32> = attr("limit"),
        pub offset: Option<i32> = attr("offset"),
        pub fields: Vec<QueueQueryField> = list("field"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MailQueueAction in "action" {
        pub op: QueueAction = attr("op"),
        pub by: QueueActionBy = attr("by"),
        pub query: Option<QueueQuery> = child("query"),
        /// Comma separated queue ids, used with `by="id"`.
        pub ids: Option<String> = text,
    }
}

impl MailQueueAction {
    pub fn by_ids(op: QueueAction, ids: &[&str]) -> Self {
        Self {
            op,
            by: QueueActionBy::Id,
            query: None,
            ids: Some(ids.join(",")),
        }
    }

    pub fn by_query(op: QueueAction, query: QueueQuery) -> Self {
        Self {
            op,
            by: QueueActionBy::Query,
            query: Some(query),
            ids: None,
        }
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MailQueueWithAction in "queue" {
        /// Queue name: incoming, active, deferred, hold or corrupt.
        pub name: String = attr("name"),
        pub action: MailQueueAction = child("action"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerWithQueueAction in "server" {
        pub name: String = attr("name"),
        pub queue: MailQueueWithAction = child("queue"),
    }
}

wire_object! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MailQueueActionRequest in "MailQueueActionRequest" in ADMIN_NAMESPACE {
        pub server: ServerWithQueueAction = child("server"),
    }
}

wire_object! {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct MailQueueActionResponse in "MailQueueActionResponse" in ADMIN_NAMESPACE {}
}
