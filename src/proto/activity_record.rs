// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! `com.android.server.wm` activity identification messages.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IdentifierProto {
    #[prost(int32, tag = "1")]
    pub hash_code: i32,
    #[prost(int32, tag = "2")]
    pub user_id: i32,
    /// Component name, e.g. `com.example/.MainActivity`.
    #[prost(string, tag = "3")]
    pub title: ::prost::alloc::string::String,
}

impl ::prost::Name for IdentifierProto {
    const NAME: &'static str = "IdentifierProto";
    const PACKAGE: &'static str = "com.android.server.wm";
}

impl IdentifierProto {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Activity that a launch sequence resolved to.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActivityRecordProto {
    #[prost(message, optional, tag = "1")]
    pub identifier: ::core::option::Option<IdentifierProto>,
    #[prost(string, tag = "2")]
    pub state: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub visible: bool,
    #[prost(bool, tag = "4")]
    pub front_of_task: bool,
    #[prost(int32, tag = "5")]
    pub proc_id: i32,
    #[prost(bool, tag = "6")]
    pub translucent: bool,
}

impl ::prost::Name for ActivityRecordProto {
    const NAME: &'static str = "ActivityRecordProto";
    const PACKAGE: &'static str = "com.android.server.wm";
}

impl ActivityRecordProto {
    /// Returns the identifier, inserting a default one if absent.
    pub fn identifier_mut(&mut self) -> &mut IdentifierProto {
        self.identifier.get_or_insert_with(IdentifierProto::default)
    }

    /// Identifier title, empty when no identifier is set.
    pub fn title(&self) -> &str {
        self.identifier
            .as_ref()
            .map(|identifier| identifier.title.as_str())
            .unwrap_or_default()
    }
}
