//! The views module contains the components for all Layouts and Routes for our app.
//! Each submodule corresponds to a specific section of the application,
//! encapsulating the layout and routing logic for that section.

mod events;
pub use events::Events;

mod namespaces;
pub use namespaces::Namespaces;

mod navbar;
pub use navbar::Navbar;

mod nodes;
pub use nodes::Nodes;

mod overview;
pub use overview::Overview;

mod pods;
pub use pods::Pods;
