/// neutral gray used for any line the palette does not know.
pub const DEFAULT_LINE_COLOR: &str = "#6D6E71";

/// fixed display color per line short name, matching the agency's branding.
pub fn line_color(line: &str) -> &'static str {
    match line {
        "1" | "2" | "3" => "#EE352E",
        "4" | "5" | "6" | "6X" => "#00933C",
        "7" | "7X" => "#B933AD",
        "A" | "C" | "E" => "#0039A6",
        "B" | "D" | "F" | "M" => "#FF6319",
        "G" => "#6CBE45",
        "J" | "Z" => "#996633",
        "L" => "#A7A9AC",
        "N" | "Q" | "R" | "W" => "#FCCC0A",
        "S" | "FS" | "GS" | "H" => "#808183",
        "SIR" => "#2850AD",
        _ => DEFAULT_LINE_COLOR,
    }
}
