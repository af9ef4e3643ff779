//! Ordered caller handlers for one event name
//!
//! The controller's own handler always runs first; the handlers collected
//! here run afterwards in the order they were added. A caller handler can
//! therefore observe the state the internal handler produced but cannot
//! prevent it.

use std::fmt;

pub type Handler<'a, E> = Box<dyn FnMut(&E) + 'a>;

pub struct HandlerChain<'a, E> {
    handlers: Vec<Handler<'a, E>>,
}

impl<E> fmt::Debug for HandlerChain<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl<E> Default for HandlerChain<'_, E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<'a, E> HandlerChain<'a, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handler: impl FnMut(&E) + 'a) {
        self.handlers.push(Box::new(handler));
    }

    pub fn run(&mut self, event: &E) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_empty_chain_runs_nothing() {
        let mut chain: HandlerChain<'_, u8> = HandlerChain::new();
        chain.run(&1);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_handlers_run_in_insertion_order() {
        let log = RefCell::new(Vec::new());
        let mut chain = HandlerChain::new();
        chain.push(|value: &u8| log.borrow_mut().push(format!("first {}", value)));
        chain.push(|value: &u8| log.borrow_mut().push(format!("second {}", value)));

        chain.run(&7);

        assert_eq!(chain.len(), 2);
        assert_eq!(*log.borrow(), vec!["first 7", "second 7"]);
    }
}
