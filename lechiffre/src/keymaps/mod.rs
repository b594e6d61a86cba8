//! Keymaps for the Le Chiffre.
//!
//! The board has 35 keys and a clickable encoder on a 4x11 matrix. Row 0 holds the top row with
//! the encoder button in the middle column, rows 1 and 2 leave the middle column empty, and the
//! four thumb keys sit at columns 3, 4, 6 and 7 of row 3.

/// Place the keys of the physical layout on the matrix, filling the unused positions with `No`
macro_rules! layout {
    (
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $enc:expr, $k06:expr, $k07:expr, $k08:expr, $k09:expr, $k0a:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr,             $k16:expr, $k17:expr, $k18:expr, $k19:expr, $k1a:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr,             $k26:expr, $k27:expr, $k28:expr, $k29:expr, $k2a:expr,
                                       $t33:expr, $t34:expr,             $t36:expr, $t37:expr $(,)?
    ) => {
        [
            [$k00, $k01, $k02, $k03, $k04, $enc, $k06, $k07, $k08, $k09, $k0a],
            [$k10, $k11, $k12, $k13, $k14, $crate::a!(No), $k16, $k17, $k18, $k19, $k1a],
            [$k20, $k21, $k22, $k23, $k24, $crate::a!(No), $k26, $k27, $k28, $k29, $k2a],
            [
                $crate::a!(No), $crate::a!(No), $crate::a!(No), $t33, $t34, $crate::a!(No),
                $t36, $t37, $crate::a!(No), $crate::a!(No), $crate::a!(No),
            ],
        ]
    };
}

pub mod mkalinski;
pub mod oled;

pub const ROW: usize = 4;
pub const COL: usize = 11;
pub const NUM_ENCODER: usize = 1;
