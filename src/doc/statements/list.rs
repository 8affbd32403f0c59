/*!
# `LIST [<from line number>][-<to line number>]`

## Purpose
Print program lines.

## Remarks
Lines come out in order exactly as they were typed. A range
selects the lines between its ends, inclusive. Either end
may be left open.

## Example
```text
LIST          ' The whole program.
LIST 40       ' Line 40 alone.
LIST 200-     ' Line 200 onward.
LIST -90      ' Up to line 90.
LIST 10-50    ' Lines 10 through 50.
```

*/
