// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022 The armv7m-boot developers

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::boot::arch_boot
//!
//! # Vector table wiring
//!
//! This module needs no assembly counterpart. On ARMv7-M the hardware itself loads the Main
//! Stack Pointer from slot 0 of the vector table before the first instruction executes (see
//! ARMv7-M Architecture Reference Manual DDI 0403E.b section B1.5.3), so the reset handler
//! can be an ordinary function that is free to use the stack right away.
//! ARMv7-Mではhardwareが最初の命令の前にvector tableのslot 0からSPを読み込むので，
//! aarch64のようなassemblyのtrampolineは要らない．
//!
//! For this to work as expected, the external vector table artifact must hold:
//!
//! - slot 0: the `__stack_high` boundary address,
//! - slot 1: the address of [`_start_rust`].

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The Rust entry of the final image.
/// Rustの開始地点
///
/// Called by hardware on reset through slot 1 of the vector table.
/// resetの直後にhardwareからここに飛んでくる
///
/// # Safety
///
/// - Must only ever be reached through the reset vector, exactly once per power-on or reset.
/// - Static memory is not initialized yet. The code must not use or reference it in any way.
/// - staticはまだ初期化されていないので触ってはいけない
#[no_mangle]
pub unsafe extern "C" fn _start_rust() -> ! {
    // ../../../runtime_init.rsのruntime_initへ飛ぶ
    crate::runtime_init::runtime_init()
}
