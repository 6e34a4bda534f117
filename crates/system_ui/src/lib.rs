//! Shared UI primitive library for the desktop shell.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the shell stylesheet. Shell surfaces compose these primitives instead of emitting ad hoc
//! chrome markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Dock,
    DockButton, DockSeparator, MenuBar, MenuBarSection, MenuItem, MenuSeparator, MenuSurface,
    Modal, ResizeHandle, WindowBody, WindowControlButton, WindowControlKind, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
