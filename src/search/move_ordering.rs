use crate::core::*;

/// Verdadeiro se o destino tem uma peça (lance de captura).
#[inline(always)]
pub fn is_capturing_move<P: Position + ?Sized>(position: &P, to: Square) -> bool {
    position.cell(to).is_occupied()
}

/// Ordena os destinos de uma peça para maximizar podas Alpha-Beta:
/// capturas primeiro, depois lances calmos. A ordenação é estável, por isso
/// a ordem relativa dentro de cada grupo mantém-se.
#[inline(always)]
pub fn order_moves<P: Position + ?Sized>(position: &P, moves: &mut [Square]) {
    moves.sort_by_key(|&to| !is_capturing_move(position, to));
}
