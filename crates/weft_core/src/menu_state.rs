//! Shared "currently open menu" registry
//!
//! Only one popup menu may be visible at a time across all mounted
//! components. [`MenuRegistry`] tracks every mounted menu and which one (if
//! any) is open. Opening a menu dismisses the previous owner; closing or
//! unregistering a menu releases the reference if it still points at it.
//!
//! ```ignore
//! use weft_core::menu_state::MenuRegistry;
//!
//! let registry = MenuRegistry::global();
//! let id = registry.register(Arc::downgrade(&menu) as Weak<dyn MenuDismiss>);
//! registry.open(id);    // dismisses whichever menu was open before
//! registry.close(id);
//! registry.unregister(id); // on unmount
//! ```
//!
//! Most code uses the process-wide [`MenuRegistry::global()`]. Independent
//! registries can be created with [`MenuRegistry::new()`] to scope the rule to
//! a single window or test.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a mounted menu in a [`MenuRegistry`]
    pub struct MenuId;
}

/// Global registry instance
static GLOBAL_REGISTRY: OnceLock<Arc<MenuRegistry>> = OnceLock::new();

/// Implemented by components whose menu can be closed from the outside
pub trait MenuDismiss: Send + Sync {
    /// Close the menu because another menu was opened
    ///
    /// Called without any registry lock held.
    fn dismiss_menu(&self);
}

struct RegistryInner {
    menus: SlotMap<MenuId, Weak<dyn MenuDismiss>>,
    open: Option<MenuId>,
}

/// Registry enforcing a single open menu
pub struct MenuRegistry {
    inner: Mutex<RegistryInner>,
}

impl MenuRegistry {
    /// Create an independent registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                menus: SlotMap::with_key(),
                open: None,
            }),
        }
    }

    /// Get the process-wide registry
    pub fn global() -> Arc<MenuRegistry> {
        Arc::clone(GLOBAL_REGISTRY.get_or_init(|| Arc::new(MenuRegistry::new())))
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a mounted menu
    pub fn register(&self, menu: Weak<dyn MenuDismiss>) -> MenuId {
        let id = self.lock().menus.insert(menu);
        tracing::trace!(?id, "menu registered");
        id
    }

    /// Remove a menu on unmount, releasing the open reference if it held it
    pub fn unregister(&self, id: MenuId) {
        let mut inner = self.lock();
        inner.menus.remove(id);
        if inner.open == Some(id) {
            inner.open = None;
        }
        tracing::trace!(?id, "menu unregistered");
    }

    /// Mark `id` as the open menu, dismissing the previous one
    pub fn open(&self, id: MenuId) {
        let displaced = {
            let mut inner = self.lock();
            if !inner.menus.contains_key(id) {
                return;
            }
            match inner.open.replace(id) {
                Some(previous) if previous != id => inner.menus.get(previous).cloned(),
                _ => None,
            }
        };

        // Dismiss outside the lock so the displaced menu may call back in
        if let Some(menu) = displaced.and_then(|weak| weak.upgrade()) {
            tracing::debug!(?id, "opening menu dismissed the previously open menu");
            menu.dismiss_menu();
        }
    }

    /// Release the open reference if `id` holds it
    ///
    /// Returns whether the reference was released.
    pub fn close(&self, id: MenuId) -> bool {
        let mut inner = self.lock();
        if inner.open == Some(id) {
            inner.open = None;
            true
        } else {
            false
        }
    }

    /// The menu currently holding the open reference
    pub fn current(&self) -> Option<MenuId> {
        self.lock().open
    }

    /// Check whether `id` holds the open reference
    pub fn is_open(&self, id: MenuId) -> bool {
        self.lock().open == Some(id)
    }

    /// Number of mounted menus
    pub fn len(&self) -> usize {
        self.lock().menus.len()
    }

    /// Check if no menus are mounted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MenuRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("MenuRegistry")
            .field("menus", &inner.menus.len())
            .field("open", &inner.open)
            .finish()
    }
}
