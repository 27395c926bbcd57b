pub mod group;
pub mod member;
pub mod profile;
pub mod user;

pub use group::Group;
pub use member::{Member, MemberPayload};
pub use profile::{ProfilePayload, UserProfile};
pub use user::{User, UserPayload, UserWithProfiles};
