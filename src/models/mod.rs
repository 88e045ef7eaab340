pub mod activity;
pub mod activity_publication;
pub mod contribution_opportunity;
pub mod faq;
pub mod organizer;
pub mod social_media_platform;

pub use activity::{
    Activity, ActivityInput, ActivityKind, ActivityRow, ActivityType, EventDetails, EventFormat,
    EventLocation, StudyGroupDetails,
};
pub use activity_publication::{
    ActivityPublication, ActivityPublicationInput, PublicationListingRow,
};
pub use contribution_opportunity::{
    ContributionOpportunity, ContributionOpportunityInput, OpportunityType,
};
pub use faq::{Faq, FaqCategory, FaqInput};
pub use organizer::{Organizer, OrganizerInput};
pub use social_media_platform::{LinkType, SocialMediaPlatform, SocialMediaPlatformInput};
