//! Classification of the image tokens the game renders into board cells.
//!
//! The page encodes everything about a cell's occupant in one image file
//! name: owner, rank, and whether the piece is mid-animation. Rather than
//! substring-matching those names, the full vocabulary is enumerated here
//! and anything outside it maps to [`Glyph::Unknown`], which classifies as
//! neither piece nor empty. Unrecognized renderings therefore can never
//! inflate a piece count.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The human player's orange pieces (`you*` images).
    User,
    /// The computer opponent's blue pieces (`me*` images).
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Regular,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Idle,
    /// The distinct visual variant shown only while a piece is moving.
    Animating,
}

/// The two background renderings an unoccupied cell can have. The game uses
/// both; whether they differ beyond cell color is not established, so they
/// are preserved as distinct values that both count as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyCell {
    Dark,
    Light,
}

/// Semantic reading of the image rendered at one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Piece {
        owner: Owner,
        rank: Rank,
        motion: Motion,
    },
    Empty(EmptyCell),
    /// Absent element, absent attribute, or an identifier outside the known
    /// vocabulary.
    Unknown,
}

impl Glyph {
    /// Maps an image `src` value to its semantic reading. Only the trailing
    /// path segment is significant; the page may prefix the file name with
    /// an arbitrary asset path.
    pub fn classify(src: &str) -> Glyph {
        use {EmptyCell::*, Motion::*, Owner::*, Rank::*};

        let file = src.rsplit('/').next().unwrap_or(src);
        match file {
            "you1.gif" => Glyph::piece(User, Regular, Idle),
            "you1k.gif" => Glyph::piece(User, King, Idle),
            "you2.gif" => Glyph::piece(User, Regular, Animating),
            "you2k.gif" => Glyph::piece(User, King, Animating),
            "me1.gif" => Glyph::piece(Computer, Regular, Idle),
            "me1k.gif" => Glyph::piece(Computer, King, Idle),
            "me2.gif" => Glyph::piece(Computer, Regular, Animating),
            "me2k.gif" => Glyph::piece(Computer, King, Animating),
            "black.gif" => Glyph::Empty(Dark),
            "gray.gif" => Glyph::Empty(Light),
            _ => Glyph::Unknown,
        }
    }

    const fn piece(owner: Owner, rank: Rank, motion: Motion) -> Glyph {
        Glyph::Piece {
            owner,
            rank,
            motion,
        }
    }

    pub fn is_piece(self) -> bool {
        matches!(self, Glyph::Piece { .. })
    }

    pub fn is_user_piece(self) -> bool {
        matches!(
            self,
            Glyph::Piece {
                owner: Owner::User,
                ..
            }
        )
    }

    pub fn is_computer_piece(self) -> bool {
        matches!(
            self,
            Glyph::Piece {
                owner: Owner::Computer,
                ..
            }
        )
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Glyph::Empty(_))
    }

    pub fn is_king(self) -> bool {
        matches!(
            self,
            Glyph::Piece {
                rank: Rank::King,
                ..
            }
        )
    }

    pub fn is_animating(self) -> bool {
        matches!(
            self,
            Glyph::Piece {
                motion: Motion::Animating,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every identifier the page is known to render.
    const VOCABULARY: [&str; 10] = [
        "you1.gif", "you1k.gif", "you2.gif", "you2k.gif", "me1.gif", "me1k.gif", "me2.gif",
        "me2k.gif", "black.gif", "gray.gif",
    ];

    #[test]
    fn classifies_user_pieces() {
        let glyph = Glyph::classify("you1.gif");
        assert!(glyph.is_user_piece());
        assert!(!glyph.is_king());
        assert!(!glyph.is_animating());

        let king = Glyph::classify("you1k.gif");
        assert!(king.is_user_piece());
        assert!(king.is_king());

        let moving_king = Glyph::classify("you2k.gif");
        assert!(moving_king.is_animating());
        assert!(moving_king.is_king());
    }

    #[test]
    fn classifies_computer_pieces() {
        assert!(Glyph::classify("me1.gif").is_computer_piece());
        assert!(Glyph::classify("me2.gif").is_animating());
        assert!(Glyph::classify("me1k.gif").is_king());
    }

    #[test]
    fn both_backgrounds_count_as_empty_but_stay_distinct() {
        let dark = Glyph::classify("black.gif");
        let light = Glyph::classify("gray.gif");
        assert!(dark.is_empty());
        assert!(light.is_empty());
        assert_ne!(dark, light);
    }

    #[test]
    fn asset_path_prefixes_are_ignored() {
        assert_eq!(
            Glyph::classify("img/checkers/you1.gif"),
            Glyph::classify("you1.gif")
        );
        assert_eq!(
            Glyph::classify("/static/me2k.gif"),
            Glyph::classify("me2k.gif")
        );
    }

    #[test]
    fn unknown_identifiers_are_neither_piece_nor_empty() {
        for src in ["sprite.png", "you3.gif", "me.gif", "", "you1.gif.bak"] {
            let glyph = Glyph::classify(src);
            assert_eq!(glyph, Glyph::Unknown, "{src:?}");
            assert!(!glyph.is_piece());
            assert!(!glyph.is_empty());
            assert!(!glyph.is_king());
            assert!(!glyph.is_animating());
        }
    }

    #[test]
    fn owner_predicates_are_mutually_exclusive_and_exhaustive() {
        for src in VOCABULARY {
            let glyph = Glyph::classify(src);
            let classes = [
                glyph.is_user_piece(),
                glyph.is_computer_piece(),
                glyph.is_empty(),
            ];
            assert_eq!(
                classes.iter().filter(|&&c| c).count(),
                1,
                "exactly one class must hold for {src:?}"
            );
        }
    }

    #[test]
    fn animating_variants_exist_for_every_owner_rank_combination() {
        let animating = VOCABULARY
            .iter()
            .filter(|src| Glyph::classify(src).is_animating())
            .count();
        assert_eq!(animating, 4); // regular + king, both owners
    }
}
