/*!
# `PRINT [<list of expressions>]`

## Purpose
Write values to the terminal.

## Remarks
A `PRINT` by itself outputs a newline.
Items separated by a semicolon, a comma, or nothing at all
are printed with a single space between them.
To suppress the newline, end the list with a semicolon or comma.

## Example
```text
PRINT "TOTAL" 10+5;"ITEMS"
TOTAL 15 ITEMS
```

*/
