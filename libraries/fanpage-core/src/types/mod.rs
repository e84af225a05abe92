mod ids;
mod post;
mod timer;
mod track;
mod view;

pub use ids::{PostId, TrackId};
pub use post::{CreatePost, Post, UpdatePost, UNTITLED};
pub use timer::{TimerId, TimerTask};
pub use track::{Track, VinylView};
pub use view::{Collection, ElementRef, Mark};
