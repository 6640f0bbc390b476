//! stages/registry.rs
//! Stage registry and factory functions.

use super::b64::Base64Stage;
use super::bifid::BifidStage;
use super::caesar::CaesarStage;
use super::columnar::ColumnarStage;
use super::double_columnar::DoubleColumnarStage;
use super::railfence::RailfenceStage;
use super::reverse::ReverseStage;
use super::xor::XorStage;
use super::{StageContext, StageId, StageTransform};

pub fn create_stage(id: StageId, ctx: &StageContext) -> Box<dyn StageTransform> {
    match id {
        StageId::Caesar => Box::new(CaesarStage),
        StageId::Bifid => Box::new(BifidStage::new(ctx.keys.clone(), ctx.bifid_alphabet)),
        StageId::Columnar => Box::new(ColumnarStage::new(ctx.keys.clone())),
        StageId::DoubleColumnar => Box::new(DoubleColumnarStage::new(ctx.keys.clone())),
        StageId::B64 => Box::new(Base64Stage),
        StageId::Xor => Box::new(XorStage::new(ctx.keys.clone())),
        StageId::Railfence => Box::new(RailfenceStage),
        StageId::Reverse => Box::new(ReverseStage),
    }
}

/// Instantiate the full stage chain for one pipeline, in order.
pub fn create_stage_set(ids: &[StageId], ctx: &StageContext) -> Vec<Box<dyn StageTransform>> {
    ids.iter().map(|&id| create_stage(id, ctx)).collect()
}
