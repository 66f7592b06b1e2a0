mod api_format;
mod email_address;
mod newsletter_content;
mod recipient;
mod schedule_time;
mod sender_profile;

pub use api_format::ApiFormat;
pub use email_address::EmailAddress;
pub use newsletter_content::NewsletterContent;
pub use recipient::Recipient;
pub use schedule_time::{DeliveryTime, ScheduleTimeError};
pub use sender_profile::SenderProfile;
