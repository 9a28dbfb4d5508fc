//! Entity graph for Telegram Bot API responses.
//!
//! Everything here is plain data decoded from JSON. The only behavior lives in
//! small derived queries (command parsing, chat predicates, update routing).

mod bot;
mod chat;
mod checklist;
mod constants;
mod games;
mod gifts;
mod markup;
mod media;
mod message;
mod payments;
mod service;
mod stickers;
mod update;
mod user;

pub use bot::{
    BotCommand, BotCommandScope, BotDescription, BotName, BotShortDescription, MenuButton,
    PreparedInlineMessage, ResponseParameters, SentWebAppMessage, WebAppData, WebAppInfo,
};
pub use chat::{
    BusinessBotRights, BusinessConnection, BusinessMessagesDeleted, Chat, ChatAdministratorRights,
    ChatBoost, ChatBoostRemoved, ChatBoostSource, ChatBoostUpdated, ChatFullInfo, ChatId,
    ChatInviteLink, ChatJoinRequest, ChatLocation, ChatMember, ChatMemberStatus,
    ChatMemberUpdated, ChatPermissions, ChatPhoto, ChatType, ForumTopic, UserChatBoosts,
};
pub use checklist::{Checklist, ChecklistTask, ChecklistTasksAdded, ChecklistTasksDone};
pub use constants::{ChatAction, ParseMode, UpdateType};
pub use games::{CallbackGame, Game, GameHighScore};
pub use gifts::{
    AcceptedGiftTypes, Gift, GiftInfo, Gifts, OwnedGift, OwnedGifts, UniqueGift,
    UniqueGiftBackdrop, UniqueGiftBackdropColors, UniqueGiftInfo, UniqueGiftModel,
    UniqueGiftSymbol,
};
pub use markup::{
    CopyTextButton, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
    SwitchInlineQueryChosenChat,
};
pub use media::{
    Animation, Audio, Contact, Dice, Document, File, Location, PaidMedia, PaidMediaInfo,
    PhotoSize, Poll, PollAnswer, PollOption, Venue, Video, VideoNote, Voice, UserProfilePhotos,
};
pub use message::{
    ExternalReplyInfo, LinkPreviewOptions, Message, MessageEntity, MessageEntityKind, MessageId,
    MessageOrigin, MessageReactionCountUpdated, MessageReactionUpdated, ReactionCount,
    ReactionType, ReplyParameters, Story, TextQuote,
};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, RefundedPayment, ShippingAddress, ShippingOption,
    StarAmount, StarTransaction, StarTransactions, SuccessfulPayment, TransactionPartner,
};
pub use service::{
    BackgroundFill, BackgroundType, ChatBackground, ChatBoostAdded, ChatShared,
    DirectMessagePriceChanged, ForumTopicClosed, ForumTopicCreated, ForumTopicEdited,
    ForumTopicReopened, GeneralForumTopicHidden, GeneralForumTopicUnhidden, Giveaway,
    GiveawayCompleted, GiveawayCreated, GiveawayWinners, MessageAutoDeleteTimerChanged,
    PaidMessagePriceChanged, ProximityAlertTriggered, SharedUser, UsersShared, VideoChatEnded,
    VideoChatParticipantsInvited, VideoChatScheduled, VideoChatStarted, WriteAccessAllowed,
};
pub use stickers::{MaskPosition, Sticker, StickerFormat, StickerSet, StickerType};
pub use update::{
    CallbackQuery, ChosenInlineResult, InlineQuery, PaidMediaPurchased, PreCheckoutQuery,
    ShippingQuery, Update, UpdateKind, WebhookInfo,
};
pub use user::User;

/// Default endpoint for downloading files, `{token}` and `{path}` substituted.
pub const FILE_ENDPOINT: &str = "https://api.telegram.org/file/bot{token}/{path}";
