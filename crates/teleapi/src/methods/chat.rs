//! Chat administration: members, permissions, invite links, pins and topics.

use teleapi_types::{
    ChatAdministratorRights, ChatFullInfo, ChatId, ChatInviteLink, ChatMember, ChatPermissions,
    ForumTopic, Sticker, UserChatBoosts,
};

use crate::error::Result;
use crate::file::{InputFile, RequestFile, upload_parts};
use crate::params::{Candidate, Params};
use crate::request::Request;

fn chat_params(chat_id: &ChatId) -> Result<Params> {
    let mut params = Params::new();
    params.add_chat_id("chat_id", chat_id)?;
    Ok(params)
}

fn chat_user_params(chat_id: &ChatId, user_id: i64) -> Result<Params> {
    let mut params = chat_params(chat_id)?;
    params.add_first_valid("user_id", &[Candidate::Int(user_id)])?;
    Ok(params)
}

fn topic_params(chat_id: &ChatId, message_thread_id: i64) -> Result<Params> {
    let mut params = chat_params(chat_id)?;
    params.add_first_valid("message_thread_id", &[Candidate::Int(message_thread_id)])?;
    Ok(params)
}

/// Requests whose only parameter is the target chat.
macro_rules! chat_requests {
    ($($(#[$meta:meta])* $name:ident => $method:literal -> $response:ty;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub chat_id: ChatId,
        }

        impl $name {
            pub fn new(chat_id: impl Into<ChatId>) -> Self {
                Self { chat_id: chat_id.into() }
            }
        }

        impl Request for $name {
            const METHOD: &'static str = $method;
            type Response = $response;

            fn params(&self) -> Result<Params> {
                chat_params(&self.chat_id)
            }
        }
    )*};
}

chat_requests! {
    GetChat => "getChat" -> ChatFullInfo;
    GetChatAdministrators => "getChatAdministrators" -> Vec<ChatMember>;
    GetChatMemberCount => "getChatMemberCount" -> u32;
    LeaveChat => "leaveChat" -> bool;
    /// Revokes the previous primary link and returns the new one.
    ExportChatInviteLink => "exportChatInviteLink" -> String;
    DeleteChatPhoto => "deleteChatPhoto" -> bool;
    UnpinAllChatMessages => "unpinAllChatMessages" -> bool;
    DeleteChatStickerSet => "deleteChatStickerSet" -> bool;
    CloseGeneralForumTopic => "closeGeneralForumTopic" -> bool;
    ReopenGeneralForumTopic => "reopenGeneralForumTopic" -> bool;
    HideGeneralForumTopic => "hideGeneralForumTopic" -> bool;
    UnhideGeneralForumTopic => "unhideGeneralForumTopic" -> bool;
    UnpinAllGeneralForumTopicMessages => "unpinAllGeneralForumTopicMessages" -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Request for GetChatMember {
    const METHOD: &'static str = "getChatMember";
    type Response = ChatMember;

    fn params(&self) -> Result<Params> {
        chat_user_params(&self.chat_id, self.user_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time the ban ends; zero bans forever.
    pub until_date: i64,
    pub revoke_messages: bool,
}

impl Request for BanChatMember {
    const METHOD: &'static str = "banChatMember";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_user_params(&self.chat_id, self.user_id)?;
        params.add_non_zero("until_date", self.until_date);
        params.add_flag("revoke_messages", self.revoke_messages);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Leaves members that are not banned untouched.
    pub only_if_banned: bool,
}

impl Request for UnbanChatMember {
    const METHOD: &'static str = "unbanChatMember";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_user_params(&self.chat_id, self.user_id)?;
        params.add_flag("only_if_banned", self.only_if_banned);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: bool,
    pub until_date: i64,
}

impl Request for RestrictChatMember {
    const METHOD: &'static str = "restrictChatMember";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_user_params(&self.chat_id, self.user_id)?;
        params.add_json("permissions", &self.permissions)?;
        params.add_flag(
            "use_independent_chat_permissions",
            self.use_independent_chat_permissions,
        );
        params.add_non_zero("until_date", self.until_date);
        Ok(params)
    }
}

/// Grants administrator rights; every right is sent explicitly so that
/// `false` demotes.
#[derive(Debug, Clone, Default)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub rights: ChatAdministratorRights,
}

impl Request for PromoteChatMember {
    const METHOD: &'static str = "promoteChatMember";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_user_params(&self.chat_id, self.user_id)?;
        let rights = &self.rights;
        for (key, value) in [
            ("is_anonymous", rights.is_anonymous),
            ("can_manage_chat", rights.can_manage_chat),
            ("can_delete_messages", rights.can_delete_messages),
            ("can_manage_video_chats", rights.can_manage_video_chats),
            ("can_restrict_members", rights.can_restrict_members),
            ("can_promote_members", rights.can_promote_members),
            ("can_change_info", rights.can_change_info),
            ("can_invite_users", rights.can_invite_users),
            ("can_post_messages", rights.can_post_messages),
            ("can_edit_messages", rights.can_edit_messages),
            ("can_pin_messages", rights.can_pin_messages),
            ("can_post_stories", rights.can_post_stories),
            ("can_edit_stories", rights.can_edit_stories),
            ("can_delete_stories", rights.can_delete_stories),
            ("can_manage_topics", rights.can_manage_topics),
        ] {
            params.add_bool(key, value);
        }
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub custom_title: String,
}

impl Request for SetChatAdministratorCustomTitle {
    const METHOD: &'static str = "setChatAdministratorCustomTitle";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_user_params(&self.chat_id, self.user_id)?;
        params.insert("custom_title", self.custom_title.as_str());
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BanChatSenderChat {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Request for BanChatSenderChat {
    const METHOD: &'static str = "banChatSenderChat";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("sender_chat_id", &[Candidate::Int(self.sender_chat_id)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnbanChatSenderChat {
    pub chat_id: ChatId,
    pub sender_chat_id: i64,
}

impl Request for UnbanChatSenderChat {
    const METHOD: &'static str = "unbanChatSenderChat";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("sender_chat_id", &[Candidate::Int(self.sender_chat_id)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: bool,
}

impl Request for SetChatPermissions {
    const METHOD: &'static str = "setChatPermissions";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_json("permissions", &self.permissions)?;
        params.add_flag(
            "use_independent_chat_permissions",
            self.use_independent_chat_permissions,
        );
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,
    pub name: String,
    pub expire_date: i64,
    pub member_limit: u32,
    pub creates_join_request: bool,
}

impl Request for CreateChatInviteLink {
    const METHOD: &'static str = "createChatInviteLink";
    type Response = ChatInviteLink;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_non_empty("name", &self.name);
        params.add_non_zero("expire_date", self.expire_date);
        params.add_non_zero("member_limit", self.member_limit);
        params.add_flag("creates_join_request", self.creates_join_request);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
    pub name: String,
    pub expire_date: i64,
    pub member_limit: u32,
    pub creates_join_request: bool,
}

impl Request for EditChatInviteLink {
    const METHOD: &'static str = "editChatInviteLink";
    type Response = ChatInviteLink;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("invite_link", &[Candidate::Str(&self.invite_link)])?;
        params.add_non_empty("name", &self.name);
        params.add_non_zero("expire_date", self.expire_date);
        params.add_non_zero("member_limit", self.member_limit);
        params.add_flag("creates_join_request", self.creates_join_request);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateChatSubscriptionInviteLink {
    pub chat_id: ChatId,
    pub name: String,
    /// Seconds the subscription lasts; currently always 30 days.
    pub subscription_period: u32,
    /// Stars charged per period.
    pub subscription_price: u32,
}

impl Request for CreateChatSubscriptionInviteLink {
    const METHOD: &'static str = "createChatSubscriptionInviteLink";
    type Response = ChatInviteLink;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_non_empty("name", &self.name);
        params.add_first_valid(
            "subscription_period",
            &[Candidate::Int(self.subscription_period.into())],
        )?;
        params.add_first_valid(
            "subscription_price",
            &[Candidate::Int(self.subscription_price.into())],
        )?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditChatSubscriptionInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
    pub name: String,
}

impl Request for EditChatSubscriptionInviteLink {
    const METHOD: &'static str = "editChatSubscriptionInviteLink";
    type Response = ChatInviteLink;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("invite_link", &[Candidate::Str(&self.invite_link)])?;
        params.add_non_empty("name", &self.name);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevokeChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
}

impl Request for RevokeChatInviteLink {
    const METHOD: &'static str = "revokeChatInviteLink";
    type Response = ChatInviteLink;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("invite_link", &[Candidate::Str(&self.invite_link)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApproveChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Request for ApproveChatJoinRequest {
    const METHOD: &'static str = "approveChatJoinRequest";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        chat_user_params(&self.chat_id, self.user_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeclineChatJoinRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Request for DeclineChatJoinRequest {
    const METHOD: &'static str = "declineChatJoinRequest";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        chat_user_params(&self.chat_id, self.user_id)
    }
}

/// New chat photo; only uploads are accepted by the server.
#[derive(Debug, Clone)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
}

impl SetChatPhoto {
    fn file_fields(&self) -> [(&'static str, Option<&InputFile>); 1] {
        [("photo", Some(&self.photo))]
    }
}

impl Request for SetChatPhoto {
    const METHOD: &'static str = "setChatPhoto";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_inline_files(self.file_fields());
        Ok(params)
    }

    fn files(&self) -> Vec<RequestFile> {
        upload_parts(self.file_fields())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    pub title: String,
}

impl Request for SetChatTitle {
    const METHOD: &'static str = "setChatTitle";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("title", &[Candidate::Str(&self.title)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// Empty clears the description.
    pub description: String,
}

impl Request for SetChatDescription {
    const METHOD: &'static str = "setChatDescription";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.insert("description", self.description.as_str());
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub business_connection_id: String,
    pub disable_notification: bool,
}

impl Request for PinChatMessage {
    const METHOD: &'static str = "pinChatMessage";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("message_id", &[Candidate::Int(self.message_id)])?;
        params.add_non_empty("business_connection_id", &self.business_connection_id);
        params.add_flag("disable_notification", self.disable_notification);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    /// Zero unpins the most recent pinned message.
    pub message_id: i64,
    pub business_connection_id: String,
}

impl Request for UnpinChatMessage {
    const METHOD: &'static str = "unpinChatMessage";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_non_zero("message_id", self.message_id);
        params.add_non_empty("business_connection_id", &self.business_connection_id);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl Request for SetChatStickerSet {
    const METHOD: &'static str = "setChatStickerSet";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("sticker_set_name", &[Candidate::Str(&self.sticker_set_name)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetForumTopicIconStickers;

impl Request for GetForumTopicIconStickers {
    const METHOD: &'static str = "getForumTopicIconStickers";
    type Response = Vec<Sticker>;

    fn params(&self) -> Result<Params> {
        Ok(Params::new())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateForumTopic {
    pub chat_id: ChatId,
    pub name: String,
    /// RGB color of the topic icon.
    pub icon_color: u32,
    pub icon_custom_emoji_id: String,
}

impl Request for CreateForumTopic {
    const METHOD: &'static str = "createForumTopic";
    type Response = ForumTopic;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("name", &[Candidate::Str(&self.name)])?;
        params.add_non_zero("icon_color", self.icon_color);
        params.add_non_empty("icon_custom_emoji_id", &self.icon_custom_emoji_id);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditForumTopic {
    pub chat_id: ChatId,
    pub message_thread_id: i64,
    pub name: String,
    pub icon_custom_emoji_id: Option<String>,
}

impl Request for EditForumTopic {
    const METHOD: &'static str = "editForumTopic";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = topic_params(&self.chat_id, self.message_thread_id)?;
        params.add_non_empty("name", &self.name);
        // An empty id removes the icon, so it is written whenever set.
        params.add_some("icon_custom_emoji_id", self.icon_custom_emoji_id.as_deref());
        Ok(params)
    }
}

/// Requests addressing a single forum topic.
macro_rules! topic_requests {
    ($($name:ident => $method:literal;)*) => {$(
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub chat_id: ChatId,
            pub message_thread_id: i64,
        }

        impl Request for $name {
            const METHOD: &'static str = $method;
            type Response = bool;

            fn params(&self) -> Result<Params> {
                topic_params(&self.chat_id, self.message_thread_id)
            }
        }
    )*};
}

topic_requests! {
    CloseForumTopic => "closeForumTopic";
    ReopenForumTopic => "reopenForumTopic";
    DeleteForumTopic => "deleteForumTopic";
    UnpinAllForumTopicMessages => "unpinAllForumTopicMessages";
}

#[derive(Debug, Clone, Default)]
pub struct EditGeneralForumTopic {
    pub chat_id: ChatId,
    pub name: String,
}

impl Request for EditGeneralForumTopic {
    const METHOD: &'static str = "editGeneralForumTopic";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_first_valid("name", &[Candidate::Str(&self.name)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUserChatBoosts {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Request for GetUserChatBoosts {
    const METHOD: &'static str = "getUserChatBoosts";
    type Response = UserChatBoosts;

    fn params(&self) -> Result<Params> {
        chat_user_params(&self.chat_id, self.user_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerifyUser {
    pub user_id: i64,
    pub custom_description: String,
}

impl Request for VerifyUser {
    const METHOD: &'static str = "verifyUser";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        params.add_non_empty("custom_description", &self.custom_description);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerifyChat {
    pub chat_id: ChatId,
    pub custom_description: String,
}

impl Request for VerifyChat {
    const METHOD: &'static str = "verifyChat";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = chat_params(&self.chat_id)?;
        params.add_non_empty("custom_description", &self.custom_description);
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoveUserVerification {
    pub user_id: i64,
}

impl Request for RemoveUserVerification {
    const METHOD: &'static str = "removeUserVerification";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.add_first_valid("user_id", &[Candidate::Int(self.user_id)])?;
        Ok(params)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoveChatVerification {
    pub chat_id: ChatId,
}

impl Request for RemoveChatVerification {
    const METHOD: &'static str = "removeChatVerification";
    type Response = bool;

    fn params(&self) -> Result<Params> {
        chat_params(&self.chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_get_chat_only_sends_target() {
        let params = GetChat::new(42_i64).params().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("chat_id"), Some("42"));
        assert_eq!(GetChat::METHOD, "getChat");
    }

    #[test]
    fn test_chat_only_requests_reject_missing_target() {
        let err = LeaveChat::default().params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "chat_id"));
    }

    #[test]
    fn test_promote_sends_every_right() {
        let request = PromoteChatMember {
            chat_id: ChatId::from("@group"),
            user_id: 7,
            rights: ChatAdministratorRights {
                can_pin_messages: true,
                ..ChatAdministratorRights::default()
            },
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("can_pin_messages"), Some("true"));
        assert_eq!(params.get("is_anonymous"), Some("false"));
        assert_eq!(params.get("can_manage_topics"), Some("false"));
        assert_eq!(params.len(), 17);
    }

    #[test]
    fn test_restrict_encodes_permissions() {
        let request = RestrictChatMember {
            chat_id: ChatId::Id(-100),
            user_id: 5,
            permissions: ChatPermissions {
                can_send_messages: true,
                ..ChatPermissions::default()
            },
            ..RestrictChatMember::default()
        };
        let params = request.params().unwrap();
        let permissions: serde_json::Value =
            serde_json::from_str(params.get("permissions").unwrap()).unwrap();
        assert_eq!(permissions["can_send_messages"], true);
        assert_eq!(permissions["can_send_polls"], false);
        assert!(!params.contains_key("until_date"));
    }

    #[test]
    fn test_topic_requests_need_thread() {
        let err = CloseForumTopic {
            chat_id: ChatId::Id(-100),
            message_thread_id: 0,
        }
        .params()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref key } if key == "message_thread_id"));
    }

    #[test]
    fn test_edit_topic_can_remove_icon() {
        let request = EditForumTopic {
            chat_id: ChatId::Id(-100),
            message_thread_id: 3,
            name: String::new(),
            icon_custom_emoji_id: Some(String::new()),
        };
        let params = request.params().unwrap();
        assert_eq!(params.get("icon_custom_emoji_id"), Some(""));
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn test_chat_photo_upload() {
        let request = SetChatPhoto {
            chat_id: ChatId::Id(-100),
            photo: InputFile::bytes("logo.png", vec![0x89]),
        };
        assert_eq!(request.params().unwrap().len(), 1);
        assert_eq!(request.files()[0].name, "photo");
    }
}
