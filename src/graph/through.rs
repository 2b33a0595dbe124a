use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Chain (Through)
======================

Renders the source into the block, then lets the effect process that block
in place:

  [Source] ──→ [Effect] ──→ output

  let voice = SineOsc::new()
      .through(ChorusNode::new(0.8, 2.0, 0.4))
      .through(EchoNode::new(300.0, 0.4, 0.3));

Note events go to both sides so effects can clear their history on a new
note.
*/

pub struct Through<S, F> {
    source: S,
    effect: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, effect: F) -> Self {
        Self { source, effect }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.effect.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.effect.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.source.note_off(ctx);
        self.effect.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active() || self.effect.is_active()
    }
}
