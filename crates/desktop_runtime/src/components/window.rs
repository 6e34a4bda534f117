use desktop_app_contract::AppMountContext;
use leptos::{leptos_dom::helpers::WindowListenerHandle, *};
use serde_json::Value;
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControlKind, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

use super::{pointer_from_pointer_event, use_desktop_runtime, DesktopRuntimeContext};
use crate::{
    apps::{app_module, ExternalLaunchView, IframeView, NotFoundView, PdfView},
    model::{InteractionState, PointerPosition, WindowId, WindowRect},
    reducer::DesktopAction,
    resolve::{resolve_window_view, WindowView},
};

/// Pointer gesture started from window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Move,
    Resize,
}

impl Gesture {
    fn begin(self, window_id: WindowId, pointer: PointerPosition) -> DesktopAction {
        match self {
            Self::Move => DesktopAction::BeginMove { window_id, pointer },
            Self::Resize => DesktopAction::BeginResize { window_id, pointer },
        }
    }

    fn update(self, pointer: PointerPosition) -> DesktopAction {
        match self {
            Self::Move => DesktopAction::UpdateMove { pointer },
            Self::Resize => DesktopAction::UpdateResize { pointer },
        }
    }

    fn end(self) -> DesktopAction {
        match self {
            Self::Move => DesktopAction::EndMove,
            Self::Resize => DesktopAction::EndResize,
        }
    }

    fn engaged(self, interaction: &InteractionState, window_id: WindowId) -> bool {
        match self {
            Self::Move => interaction.dragging.is_some_and(|s| s.window_id == window_id),
            Self::Resize => interaction.resizing.is_some_and(|s| s.window_id == window_id),
        }
    }
}

fn frame_style(rect: WindowRect, z_index: u64) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    )
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Window-level pointer listeners for the gesture in flight. Every exit path goes through
/// [`GestureListeners::detach`].
#[derive(Clone, Copy)]
struct GestureListeners {
    handles: StoredValue<Option<Vec<WindowListenerHandle>>>,
}

impl GestureListeners {
    fn new() -> Self {
        Self {
            handles: store_value(None),
        }
    }

    fn detach(self) {
        let handles = self.handles.try_update_value(Option::take).flatten();
        for handle in handles.into_iter().flatten() {
            handle.remove();
        }
    }

    fn attach(self, runtime: DesktopRuntimeContext, gesture: Gesture) {
        self.detach();
        let finish = move || {
            runtime.dispatch_action(gesture.end());
            self.detach();
        };
        let handles = vec![
            window_event_listener(ev::pointermove, move |ev| {
                runtime.dispatch_action(gesture.update(pointer_from_pointer_event(&ev)));
            }),
            window_event_listener(ev::pointerup, move |_| finish()),
            window_event_listener(ev::pointercancel, move |_| finish()),
        ];
        self.handles.set_value(Some(handles));
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|desktop| desktop.window(window_id).cloned()));
    let focused =
        create_memo(move |_| state.with(|desktop| desktop.focused_window_id() == Some(window_id)));
    let maximized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let style = Signal::derive(move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| frame_style(w.rect, w.z_index))
                .unwrap_or_default()
        })
    });

    let listeners = GestureListeners::new();
    on_cleanup(move || listeners.detach());

    let start_gesture = move |gesture: Gesture, ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || maximized.get_untracked() {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(gesture.begin(window_id, pointer_from_pointer_event(&ev)));
        if runtime
            .interaction
            .with_untracked(|interaction| gesture.engaged(interaction, window_id))
        {
            listeners.attach(runtime, gesture);
        }
    };

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let toggle_maximize = move || runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });

    view! {
        <WindowFrame
            style=style
            aria_label=title
            focused=Signal::from(focused)
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                    start_gesture(Gesture::Move, ev);
                })
                on_dblclick=Callback::new(move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximize();
                })
            >
                <WindowControls>
                    <WindowControlButton
                        kind=WindowControlKind::Close
                        aria_label="Close window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    />
                    <WindowControlButton
                        kind=WindowControlKind::Minimize
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    />
                    <WindowControlButton
                        kind=WindowControlKind::Maximize
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() { "Restore window" } else { "Maximize window" };
                            label.to_string()
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    />
                </WindowControls>
                <WindowTitle>{move || title.get()}</WindowTitle>
            </WindowTitleBar>
            <WindowBody>
                <WindowContent window_id=window_id />
            </WindowBody>
            <Show when=move || !maximized.get()>
                <ResizeHandle on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                    start_gesture(Gesture::Resize, ev);
                })/>
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowContent(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog;

    let resolved = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .window(window_id)
                .map(|record| catalog.with(|catalog| resolve_window_view(record, catalog)))
        })
    });
    let launch_params = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .window(window_id)
                .map(|record| record.launch_params.clone())
                .unwrap_or(Value::Null)
        })
    });
    let catalog_apps = Signal::derive(move || catalog.with(|catalog| catalog.apps().to_vec()));

    move || match resolved.get() {
        None => ().into_view(),
        Some(WindowView::Pdf { url, title }) => view! { <PdfView url title /> }.into_view(),
        Some(WindowView::Iframe { url, title }) => view! { <IframeView url title /> }.into_view(),
        Some(WindowView::External { url, name }) => {
            view! { <ExternalLaunchView window_id url name /> }.into_view()
        }
        Some(WindowView::Internal(app)) => app_module(app).mount(AppMountContext {
            window_id: window_id.0,
            launch_params: launch_params.into(),
            launcher: runtime.launcher,
            host: runtime.host.with_value(|host| host.services().clone()),
            catalog: catalog_apps,
        }),
        Some(WindowView::NotFound { message }) => view! { <NotFoundView message /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DragSession, ResizeSession};

    #[test]
    fn gestures_map_to_their_action_family() {
        let pointer = PointerPosition { x: 4, y: 9 };
        assert_eq!(
            Gesture::Move.begin(WindowId(3), pointer),
            DesktopAction::BeginMove {
                window_id: WindowId(3),
                pointer,
            }
        );
        assert_eq!(
            Gesture::Resize.update(pointer),
            DesktopAction::UpdateResize { pointer }
        );
        assert_eq!(Gesture::Move.end(), DesktopAction::EndMove);
        assert_eq!(Gesture::Resize.end(), DesktopAction::EndResize);
    }

    #[test]
    fn engaged_checks_the_session_owner() {
        let rect = WindowRect {
            x: 0,
            y: 0,
            w: 500,
            h: 400,
        };
        let interaction = InteractionState {
            dragging: Some(DragSession {
                window_id: WindowId(1),
                pointer_start: PointerPosition::default(),
                rect_start: rect,
            }),
            resizing: None,
        };
        assert!(Gesture::Move.engaged(&interaction, WindowId(1)));
        assert!(!Gesture::Move.engaged(&interaction, WindowId(2)));
        assert!(!Gesture::Resize.engaged(&interaction, WindowId(1)));

        let resizing = InteractionState {
            dragging: None,
            resizing: Some(ResizeSession {
                window_id: WindowId(2),
                pointer_start: PointerPosition::default(),
                rect_start: rect,
            }),
        };
        assert!(Gesture::Resize.engaged(&resizing, WindowId(2)));
    }

    #[test]
    fn frame_style_positions_and_stacks() {
        let rect = WindowRect {
            x: 80,
            y: 70,
            w: 720,
            h: 520,
        };
        assert_eq!(
            frame_style(rect, 12),
            "left:80px;top:70px;width:720px;height:520px;z-index:12;"
        );
    }
}
