//! ASCII rendering of the known maze, north at the top.

use std::fmt;

use crate::core::{CellCoord, Direction, WallSlot};

use super::MazeGrid;

impl MazeGrid {
    fn cell_glyph(&self, coord: CellCoord) -> char {
        if coord == self.position() {
            match self.heading() {
                Direction::North => '^',
                Direction::East => '>',
                Direction::South => 'v',
                Direction::West => '<',
                _ => '*',
            }
        } else if self.is_goal(coord) {
            'G'
        } else {
            ' '
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.cols() {
            f.write_str("+---")?;
        }
        f.write_str("+\n")?;

        for y in (0..self.rows() as i32).rev() {
            let mut walls = String::with_capacity(self.cols() * 4 + 2);
            let mut floor = String::with_capacity(self.cols() * 4 + 2);
            walls.push('|');

            for x in 0..self.cols() as i32 {
                let coord = CellCoord::new(x, y);
                let cell = self.cell(coord).map_err(|_| fmt::Error)?;

                walls.push(' ');
                walls.push(self.cell_glyph(coord));
                walls.push(' ');
                walls.push(if cell.has_wall(WallSlot::East) { '|' } else { ' ' });

                floor.push_str(if cell.has_wall(WallSlot::South) {
                    "+---"
                } else {
                    "+   "
                });
            }

            writeln!(f, "{}", walls)?;
            writeln!(f, "{}+", floor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{CellCoord, Direction, Pose};
    use crate::grid::MazeGrid;

    #[test]
    fn test_render_small_maze() {
        let mut grid = MazeGrid::new(2, 2, Pose::default(), vec![CellCoord::new(1, 1)]).unwrap();
        grid.add_boundary_walls().unwrap();
        grid.add_wall(CellCoord::new(0, 0), Direction::East).unwrap();

        let expected = "\
+---+---+
|     G |
+   +   +
| ^ |   |
+---+---+
";
        assert_eq!(grid.to_string(), expected);
    }
}
