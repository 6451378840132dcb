//! The active drag session and its proxy visual.

use sortable_core::math::{Rect, Vec2};

use crate::item::ItemId;
use crate::ports::{ProxyHandle, ProxyHost};

/// Identifier of a drag session, unique for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// The floating clone of the dragged item.
///
/// Owned exclusively by its [`DragSession`]. [`destroy`](Self::destroy)
/// consumes the proxy, so it can only be torn down once.
#[derive(Debug)]
pub struct DragProxy {
    handle: ProxyHandle,
    bounds: Rect,
}

impl DragProxy {
    pub(crate) fn spawn<H: ProxyHost + ?Sized>(host: &mut H, item: ItemId, bounds: Rect) -> Self {
        let handle = host.spawn_proxy(item, bounds);
        Self { handle, bounds }
    }

    pub fn handle(&self) -> ProxyHandle {
        self.handle
    }

    /// Current on-screen bounds of the proxy.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn translate<H: ProxyHost + ?Sized>(&mut self, host: &mut H, delta: Vec2) {
        self.bounds = self.bounds.translate(delta);
        host.move_proxy(self.handle, self.bounds);
    }

    pub(crate) fn destroy<H: ProxyHost + ?Sized>(self, host: &mut H) {
        host.destroy_proxy(self.handle);
    }
}

/// A press that may turn, or has turned, into a drag.
#[derive(Debug)]
pub struct DragSession {
    id: SessionId,
    dragged: ItemId,
    proxy: Option<DragProxy>,
}

impl DragSession {
    pub(crate) fn pending(id: SessionId, dragged: ItemId) -> Self {
        Self {
            id,
            dragged,
            proxy: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn dragged(&self) -> ItemId {
        self.dragged
    }

    /// `false` while pressed below the movement threshold, `true` once dragging.
    pub fn is_active(&self) -> bool {
        self.proxy.is_some()
    }

    pub fn proxy(&self) -> Option<&DragProxy> {
        self.proxy.as_ref()
    }

    pub(crate) fn proxy_mut(&mut self) -> Option<&mut DragProxy> {
        self.proxy.as_mut()
    }

    pub(crate) fn activate(&mut self, proxy: DragProxy) {
        self.proxy = Some(proxy);
    }

    /// Tear the session down, destroying the proxy if one exists.
    pub(crate) fn close<H: ProxyHost + ?Sized>(self, host: &mut H) {
        if let Some(proxy) = self.proxy {
            proxy.destroy(host);
        }
    }
}
