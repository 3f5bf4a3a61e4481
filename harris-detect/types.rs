use harris_core::{Corner, Field};

/// Candidate corner with its normalised response score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCorner {
    pub corner: Corner,
    pub score: f32,
}

impl ScoredCorner {
    pub fn new(x: usize, y: usize, score: f32) -> Self {
        Self {
            corner: Corner::new(x, y),
            score,
        }
    }
}

/// Horizontal and vertical intensity gradients, same shape as the source image
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    pub ix: Field,
    pub iy: Field,
}

impl GradientField {
    pub fn dimensions(&self) -> (usize, usize) {
        self.ix.dimensions()
    }
}

/// Smoothed gradient products forming the 2x2 second-moment matrix per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct StructureTensor {
    pub xx: Field,
    pub xy: Field,
    pub yy: Field,
}

/// Every stage output of one detection run
#[derive(Debug, Clone)]
pub struct Detection {
    /// Raw (unnormalised) corner response
    pub response: Field,
    /// Ranked local maxima before suppression
    pub candidates: Vec<ScoredCorner>,
    /// Spatially separated corners, still in rank order
    pub corners: Vec<ScoredCorner>,
}

impl Detection {
    pub fn positions(&self) -> Vec<Corner> {
        self.corners.iter().map(|c| c.corner).collect()
    }
}
