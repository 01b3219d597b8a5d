//! Triangle classification.
//!
//! Every classifier first requires a real triangle: all sides positive and each
//! pair of sides strictly longer than the third.

pub fn equilateral(sides: [f64; 3]) -> bool {
    let [a, b, c] = sides;
    is_triangle(sides) && a == b && b == c
}

/// At least two sides equal (equilateral triangles are also isosceles).
pub fn isosceles(sides: [f64; 3]) -> bool {
    let [a, b, c] = sides;
    is_triangle(sides) && (a == b || b == c || a == c)
}

pub fn scalene(sides: [f64; 3]) -> bool {
    let [a, b, c] = sides;
    is_triangle(sides) && a != b && b != c && a != c
}

fn is_triangle([a, b, c]: [f64; 3]) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && b + c > a && a + c > b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilateral_triangles() {
        assert!(equilateral([2.0, 2.0, 2.0]));
        assert!(equilateral([0.5, 0.5, 0.5]));
        assert!(!equilateral([2.0, 3.0, 2.0]));
        assert!(!equilateral([0.0, 0.0, 0.0]));
    }

    #[test]
    fn isosceles_triangles() {
        assert!(isosceles([3.0, 4.0, 4.0]));
        assert!(isosceles([4.0, 4.0, 4.0]));
        assert!(!isosceles([2.0, 3.0, 4.0]));
        assert!(!isosceles([1.0, 1.0, 3.0]));
    }

    #[test]
    fn scalene_triangles() {
        assert!(scalene([5.0, 4.0, 6.0]));
        assert!(scalene([0.5, 0.4, 0.6]));
        assert!(!scalene([4.0, 4.0, 4.0]));
        assert!(!scalene([7.0, 3.0, 2.0]));
    }

    #[test]
    fn degenerate_triangle_is_rejected() {
        assert!(!scalene([1.0, 2.0, 3.0]));
        assert!(!isosceles([1.0, 1.0, 2.0]));
    }
}
