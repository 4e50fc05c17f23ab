// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! `android.content.IntentProto`, the subset iorap reads.

/// Intent that started a launch sequence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntentProto {
    #[prost(string, tag = "1")]
    pub action: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub categories: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub data: ::prost::alloc::string::String,
    /// Hex-formatted intent flags.
    #[prost(string, tag = "4")]
    pub flag: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub component: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub package: ::prost::alloc::string::String,
}

impl ::prost::Name for IntentProto {
    const NAME: &'static str = "IntentProto";
    const PACKAGE: &'static str = "android.content";
}

impl IntentProto {
    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = action.into();
    }
}
