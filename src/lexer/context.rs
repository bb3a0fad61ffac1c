//! The lexical-context stack.
//!
//! A context determines which token patterns are legal and how braces and
//! parens move the stack. The stack is owned by one `Tokenizer` instance —
//! it is never shared or global, so independent tokenizers cannot observe
//! each other.

/// A named tokenizer mode. `Default`, `Namespace`, `Struct`, and `Function`
/// are inclusive: they recognize the full Default token set plus their own
/// additions. `Interface` and `Parameter` are exclusive: only their own
/// restricted set is legal, and anything else is a lexical error even if it
/// would be valid at Default scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalContext {
    Default,
    Namespace,
    Interface,
    Parameter,
    Struct,
    Function,
}

impl LexicalContext {
    pub fn is_exclusive(&self) -> bool {
        matches!(self, LexicalContext::Interface | LexicalContext::Parameter)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LexicalContext::Default => "default",
            LexicalContext::Namespace => "namespace",
            LexicalContext::Interface => "interface",
            LexicalContext::Parameter => "parameter",
            LexicalContext::Struct => "struct",
            LexicalContext::Function => "function",
        }
    }
}

/// One nesting level that has not yet closed. `depth` counts the open
/// braces seen inside this frame, so only the `}` that closes the frame's
/// own body pops it — inner blocks (method bodies, control flow) balance
/// within the frame.
#[derive(Debug)]
struct Frame {
    context: LexicalContext,
    depth: u32,
}

/// What a `}` did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Closed an inner block; the current context is unchanged.
    Inner,
    /// Closed the current frame's body; the recorded context is restored.
    Popped(LexicalContext),
    /// Nothing to close at base level.
    Unbalanced,
}

#[derive(Debug)]
pub struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    pub fn new() -> Self {
        ContextStack {
            // The base frame is implicit Default and is never popped.
            frames: vec![Frame {
                context: LexicalContext::Default,
                depth: 0,
            }],
        }
    }

    pub fn current(&self) -> LexicalContext {
        self.frames.last().map(|frame| frame.context).unwrap_or(LexicalContext::Default)
    }

    /// Enters a new context. The previous context is implicitly recorded:
    /// popping this frame restores whatever is underneath.
    pub fn push(&mut self, context: LexicalContext) {
        self.frames.push(Frame { context, depth: 0 });
    }

    pub fn open_brace(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.depth += 1;
        }
    }

    pub fn close_brace(&mut self) -> CloseOutcome {
        let at_base = self.frames.len() == 1;
        let frame = self.frames.last_mut().expect("base frame always present");

        if frame.depth > 1 {
            frame.depth -= 1;
            return CloseOutcome::Inner;
        }

        if at_base {
            if frame.depth == 1 {
                frame.depth = 0;
                return CloseOutcome::Inner;
            }
            return CloseOutcome::Unbalanced;
        }

        self.frames.pop();
        CloseOutcome::Popped(self.current())
    }

    /// Pops the parameter frame opened by `(`. Returns false for a `)`
    /// with no parameter list open.
    pub fn pop_parameter(&mut self) -> bool {
        if self.current() == LexicalContext::Parameter {
            self.frames.pop();
            return true;
        }
        false
    }

    /// True once every pushed context and opened brace has closed.
    pub fn is_balanced(&self) -> bool {
        self.frames.len() == 1 && self.frames[0].depth == 0
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        ContextStack::new()
    }
}
