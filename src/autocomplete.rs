pub mod blur_timer;
pub mod callbacks;
pub mod controller;
pub mod events;
pub mod field_mode;
pub mod handler_chain;
pub mod keybindings;
pub mod options;
pub mod props;
pub mod registry;

pub use blur_timer::{BlurTimer, DEFAULT_BLUR_CLOSE_DELAY};
pub use callbacks::Callbacks;
pub use controller::{Actions, AutocompleteController, Events};
pub use events::{AutocompleteEvent, InteractionState, Key, SelectMeta, SelectTrigger};
pub use field_mode::{ControlledProps, FieldMode};
pub use handler_chain::HandlerChain;
pub use keybindings::map_key;
pub use options::AutocompleteOptions;
pub use props::{
    Attributes, InputEvent, InputOverrides, InputProps, ItemEvent, ItemOverrides, ItemProps,
    MenuProps, PointerTarget, RootProps,
};
pub use registry::VisibleItemRegistry;
