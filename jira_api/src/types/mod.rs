mod page;
pub use self::page::Page;

mod project;
pub use self::project::{
    AvatarUrls, Component, IssueType, IssueTypeStatuses, Project, ProjectCategory, ProjectDetail,
    ProjectID, ProjectRole, RoleActor, Status, User, Version,
};
