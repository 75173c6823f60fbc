use std::{borrow::Borrow, collections::HashMap, hash::Hash};

/// A stack of scope frames over a map of per-name value stacks.
///
/// Each frame lists the names it owns a layer for, in the order they were
/// bound. Each name maps to a stack with one value per owning frame, innermost
/// on top. Popping a frame removes exactly the layers it owns, so outer values
/// come back unchanged.
///
/// There is always at least one frame, the root.
///
/// # Example
/// ```
/// use seqcalc::interpreter::environment::Mapstack;
///
/// let mut env: Mapstack<String, i32> = Mapstack::new();
/// env.set("x", 1);
/// env.push();
/// assert_eq!(env.get("x"), Some(&1));
/// env.set("x", 2);
/// env.set("y", 3);
/// assert_eq!(env.get("x"), Some(&2));
/// env.pop();
/// assert_eq!(env.get("x"), Some(&1));
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Mapstack<K, V> {
    values: HashMap<K, Vec<V>>,
    frames: Vec<Vec<K>>,
}

impl<K, V> Default for Mapstack<K, V> {
    fn default() -> Self {
        Self { values: HashMap::new(),
               frames: vec![Vec::new()], }
    }
}

impl<K, V> Mapstack<K, V> where K: Eq + Hash + Clone,
                                V: Clone
{
    /// Creates an environment with an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new frame.
    ///
    /// Every name of the current frame gets a copy of its current value in
    /// the new frame, so writes inside the new frame never reach the outer
    /// value.
    pub fn push(&mut self) {
        let inherited = self.frames.last().cloned().unwrap_or_default();
        for name in &inherited {
            if let Some(stack) = self.values.get_mut(name)
               && let Some(top) = stack.last().cloned()
            {
                stack.push(top);
            }
        }
        self.frames.push(inherited);
    }

    /// Closes the current frame, dropping the layers it owns.
    ///
    /// Names whose last layer goes away become unbound. Popping the root
    /// frame leaves a fresh, empty root.
    pub fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            for name in frame {
                if let Some(stack) = self.values.get_mut(&name) {
                    stack.pop();
                    if stack.is_empty() {
                        self.values.remove(&name);
                    }
                }
            }
        }
        if self.frames.is_empty() {
            self.clear();
        }
    }

    /// Binds `name` in the current frame.
    ///
    /// A name the current frame already owns is overwritten in place; a name
    /// bound only in outer frames is shadowed by a new layer.
    pub fn set(&mut self, name: impl Into<K>, value: V) {
        let name = name.into();
        let owned = self.frames
                        .last()
                        .is_some_and(|frame| frame.contains(&name));

        match self.values.get_mut(&name) {
            Some(stack) if owned => match stack.last_mut() {
                Some(top) => *top = value,
                None => stack.push(value),
            },
            Some(stack) => {
                stack.push(value);
                self.own(name);
            },
            None => {
                self.values.insert(name.clone(), vec![value]);
                self.own(name);
            },
        }
    }

    /// Returns the innermost value of `name`.
    pub fn get<Q>(&self, name: &Q) -> Option<&V>
        where K: Borrow<Q>,
              Q: Hash + Eq + ?Sized
    {
        self.values.get(name).and_then(|stack| stack.last())
    }

    /// Returns `true` if `name` has a value in any frame.
    pub fn contains<Q>(&self, name: &Q) -> bool
        where K: Borrow<Q>,
              Q: Hash + Eq + ?Sized
    {
        self.get(name).is_some()
    }

    /// Resets to one empty root frame.
    pub fn clear(&mut self) {
        self.values.clear();
        self.frames.clear();
        self.frames.push(Vec::new());
    }

    /// Iterates over every bound name with its innermost value.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values
            .iter()
            .filter_map(|(name, stack)| stack.last().map(|value| (name, value)))
    }

    /// Iterates over every bound name with mutable access to its innermost
    /// value.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.values
            .iter_mut()
            .filter_map(|(name, stack)| stack.last_mut().map(|value| (&*name, value)))
    }

    /// Names owned by the current frame, in binding order.
    pub fn current_names(&self) -> impl Iterator<Item = &K> {
        self.frames.last().into_iter().flatten()
    }

    /// Number of frames, counting the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn own(&mut self, name: K) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(name);
        }
    }
}
