pub(crate) mod animator;
pub(crate) mod spring;

#[cfg(test)]
pub(crate) use animator::AnimationStart;
pub(crate) use animator::{
    AnimationCompletion, AnimationHandle, OffsetAnimator, SpringAnimator,
};
pub(crate) use spring::SpringConfig;
